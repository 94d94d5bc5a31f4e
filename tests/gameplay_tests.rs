//! Gravity, locking, clearing and termination driven through `Game::step`.

use blockfall::{
    ActivePiece, Board, Game, Gravity, Intent, Shape, ShapeKind, Status, BOARD_H, BOARD_W,
    GRAVITY_PERIOD,
};

fn game_with(shape: Shape, row: i32, col: i32) -> Game {
    let mut game = Game::with_seed(2024);
    game.current = ActivePiece::new(shape, row, col);
    game
}

fn occupied_in_row(board: &Board, row: i32) -> Vec<i32> {
    (0..BOARD_W as i32)
        .filter(|&col| board.get(row, col) == Some(true))
        .collect()
}

#[test]
fn bar_falls_to_floor_and_locks() {
    let mut game = game_with(ShapeKind::I.shape(), 0, 3);

    let mut steps = 0;
    while occupied_in_row(&game.board, 19).is_empty() {
        assert_eq!(game.step(None), Status::Running);
        steps += 1;
        assert!(steps < 1000, "bar never locked");
    }

    // 18 drops to reach the floor, then one blocked probe
    assert_eq!(steps, 19 * GRAVITY_PERIOD);
    assert_eq!(occupied_in_row(&game.board, 19), vec![3, 4, 5, 6]);
    for row in 0..19 {
        assert!(occupied_in_row(&game.board, row).is_empty(), "row {row}");
    }
    assert_eq!(game.score, 0);
    assert_eq!(game.current.row, 0);
    assert!(game.is_running());
}

#[test]
fn locking_last_gap_clears_row() {
    let dot = Shape::from_rows(&[&[1]]);
    let mut game = game_with(dot, 19, 0);
    for col in 1..BOARD_W {
        game.board.set(19, col, true);
    }
    game.board.set(5, 2, true);
    game.board.set(18, 7, true);
    let above: Vec<Vec<bool>> = game.board.rows().take(19).map(|r| r.to_vec()).collect();

    assert_eq!(game.apply_gravity(), Gravity::Locked);
    assert!(game.board.is_row_complete(19));
    assert_eq!(game.clear_completed_rows(), 1);

    assert_eq!(game.score, 1);
    assert!(game.board.rows().next().unwrap().iter().all(|c| !c));
    let shifted: Vec<Vec<bool>> = game.board.rows().skip(1).map(|r| r.to_vec()).collect();
    assert_eq!(shifted, above);
    assert_eq!(occupied_in_row(&game.board, 19), vec![7]);
    assert_eq!(occupied_in_row(&game.board, 6), vec![2]);
}

#[test]
fn gravity_tick_runs_clear_scan() {
    let dot = Shape::from_rows(&[&[1]]);
    let mut game = game_with(dot, 19, 0);
    for col in 1..BOARD_W {
        game.board.set(19, col, true);
    }

    for _ in 0..GRAVITY_PERIOD {
        assert_eq!(game.step(None), Status::Running);
    }

    assert_eq!(game.score, 1);
    assert!(occupied_in_row(&game.board, 19).is_empty());
}

#[test]
fn double_clear_scores_two() {
    let bar = Shape::from_rows(&[&[1, 0], &[1, 0]]);
    let mut game = game_with(bar, 18, 0);
    for row in 18..20 {
        for col in 1..BOARD_W {
            game.board.set(row, col, true);
        }
    }
    game.board.set(17, 4, true);

    assert_eq!(game.apply_gravity(), Gravity::Locked);
    assert_eq!(game.clear_completed_rows(), 2);
    assert_eq!(game.score, 2);
    assert_eq!(occupied_in_row(&game.board, 19), vec![4]);
    assert!(occupied_in_row(&game.board, 18).is_empty());
}

#[test]
fn quit_skips_gravity_and_clear() {
    let dot = Shape::from_rows(&[&[1]]);
    let mut game = game_with(dot, 19, 0);
    for col in 1..BOARD_W {
        game.board.set(19, col, true);
    }
    for _ in 0..GRAVITY_PERIOD - 1 {
        assert_eq!(game.step(None), Status::Running);
    }
    let board = game.board.clone();
    let piece = game.current.clone();

    // this tick would lock the dot and clear row 19
    assert_eq!(game.step(Some(Intent::Quit)), Status::Quit);

    assert_eq!(game.board, board);
    assert_eq!(game.current, piece);
    assert_eq!(game.score, 0);
    assert!(!game.is_running());
}

#[test]
fn blocked_spawn_ends_game_without_locking() {
    let mut game = game_with(ShapeKind::T.shape(), 0, 4);
    // fill the column under the spawn so the first drop is blocked
    for row in 3..BOARD_H {
        game.board.set(row, 5, true);
    }
    let board = game.board.clone();

    for _ in 0..GRAVITY_PERIOD - 1 {
        assert_eq!(game.step(None), Status::Running);
    }
    assert_eq!(game.step(None), Status::GameOver);

    assert_eq!(game.board, board);
    assert_eq!(game.status(), Status::GameOver);
    assert_eq!(game.step(Some(Intent::Down)), Status::GameOver);
}

#[test]
fn soft_drop_adds_to_gravity() {
    let mut game = game_with(ShapeKind::O.shape(), 0, 4);
    for _ in 0..GRAVITY_PERIOD {
        game.step(Some(Intent::Down));
    }
    assert_eq!(game.current.row, GRAVITY_PERIOD as i32 + 1);
}
