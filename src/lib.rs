pub mod app;
pub mod config;
pub mod game;
pub mod input;
pub mod ui;

pub use config::{
    BOARD_H, BOARD_W, CELL_W, GRAVITY_PERIOD, HIDDEN_ROWS, KEY_DOWN, KEY_LEFT, KEY_QUIT,
    KEY_RIGHT, KEY_ROTATE, MIN_PANE_WIDTH, PLAY_H, PLAY_W, TICK,
};
pub use game::{ActivePiece, Board, Game, Gravity, Intent, Shape, ShapeKind, Status};
