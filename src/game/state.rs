use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::{collides, random_shape_with, rotate_cw, ActivePiece, Board, Shape};
use crate::{
    BOARD_H, BOARD_W, GRAVITY_PERIOD, KEY_DOWN, KEY_LEFT, KEY_QUIT, KEY_RIGHT, KEY_ROTATE,
};

/// What a key asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Down,
    Right,
    Left,
    Rotate,
    Quit,
}

impl Intent {
    /// Unrecognized bytes are no-ops.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            KEY_DOWN => Some(Intent::Down),
            KEY_RIGHT => Some(Intent::Right),
            KEY_LEFT => Some(Intent::Left),
            KEY_ROTATE => Some(Intent::Rotate),
            KEY_QUIT => Some(Intent::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Quit,
    GameOver,
}

/// Result of one automatic drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    Fell,
    /// The piece settled and a new one spawned.
    Locked,
    /// The piece could not leave the spawn row.
    Blocked,
}

pub struct Game {
    pub board: Board,
    pub current: ActivePiece,
    pub score: u64,
    status: Status,
    ticks: u32,
    rng: StdRng,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A game whose spawn sequence is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let current = ActivePiece::spawn(random_shape_with(&mut rng), BOARD_W);
        Self {
            board: Board::new(BOARD_W, BOARD_H),
            current,
            score: 0,
            status: Status::Running,
            ticks: 0,
            rng,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Ticks since the last gravity drop.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    fn fits(&self, shape: &Shape, row: i32, col: i32) -> bool {
        !collides(&self.board, shape, row, col)
    }

    /// Moves the active piece if the target placement is clear.
    pub fn move_current(&mut self, d_row: i32, d_col: i32) -> bool {
        let next = self.current.shifted(d_row, d_col);
        if self.fits(&next.shape, next.row, next.col) {
            self.current = next;
            true
        } else {
            false
        }
    }

    /// Rotates the active piece clockwise.
    ///
    /// The probe checks the current orientation at the current offset, not
    /// the rotated one, so a rotation can be accepted into an overlapping
    /// placement. This matches how the game has always played.
    pub fn rotate_current(&mut self) -> bool {
        if !self.fits(&self.current.shape, self.current.row, self.current.col) {
            return false;
        }
        self.current.shape = rotate_cw(&self.current.shape);
        true
    }

    fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Down => {
                let _ = self.move_current(1, 0);
            }
            Intent::Right => {
                let _ = self.move_current(0, 1);
            }
            Intent::Left => {
                let _ = self.move_current(0, -1);
            }
            Intent::Rotate => {
                let _ = self.rotate_current();
            }
            Intent::Quit => {
                self.status = Status::Quit;
            }
        }
    }

    /// One automatic drop: fall a row, or lock and spawn, or end the game
    /// when the piece is stuck on the spawn row.
    pub fn apply_gravity(&mut self) -> Gravity {
        if self.move_current(1, 0) {
            return Gravity::Fell;
        }
        if self.current.row == 0 {
            debug!("spawn blocked at column {}", self.current.col);
            self.status = Status::GameOver;
            return Gravity::Blocked;
        }
        self.lock_current();
        self.spawn_next();
        Gravity::Locked
    }

    fn lock_current(&mut self) {
        debug!("locking piece at ({}, {})", self.current.row, self.current.col);
        self.board
            .lock(&self.current.shape, self.current.row, self.current.col);
    }

    pub fn spawn_next(&mut self) {
        let shape = random_shape_with(&mut self.rng);
        self.current = ActivePiece::spawn(shape, self.board.width());
        let size = self.current.shape.size();
        debug!("spawned {size}x{size} piece at column {}", self.current.col);
    }

    /// Clears complete rows, one point each. Returns how many were cleared.
    pub fn clear_completed_rows(&mut self) -> u32 {
        let cleared = self.board.clear_completed_rows();
        if cleared > 0 {
            self.score += u64::from(cleared);
            debug!("cleared {} row(s), score {}", cleared, self.score);
        }
        cleared
    }

    /// Runs the per-tick work after input has been read: dispatch, gravity on
    /// every `GRAVITY_PERIOD`th tick, then the line-clear scan.
    ///
    /// Quit and game over return immediately, skipping whatever work is left
    /// in the tick.
    pub fn step(&mut self, intent: Option<Intent>) -> Status {
        if !self.is_running() {
            return self.status;
        }

        if let Some(intent) = intent {
            self.dispatch(intent);
            if self.status == Status::Quit {
                return self.status;
            }
        }

        self.ticks = (self.ticks + 1) % GRAVITY_PERIOD;
        if self.ticks == 0 && self.apply_gravity() == Gravity::Blocked {
            return self.status;
        }

        self.clear_completed_rows();
        self.status
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
