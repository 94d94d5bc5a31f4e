// Shared game constants.
use std::time::Duration;

pub const BOARD_W: usize = 10;
pub const BOARD_H: usize = 20;
pub const HIDDEN_ROWS: usize = 1; // row 0 is the spawn row and is never drawn
pub const CELL_W: usize = 2; // render each cell as a marker plus a space
pub const PLAY_W: usize = BOARD_W * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = BOARD_H - HIDDEN_ROWS + 2; // visible rows plus ceiling/floor
// Minimal pane width to fit the well plus cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 2;

pub const TICK: Duration = Duration::from_millis(50);
pub const GRAVITY_PERIOD: u32 = 10; // ticks between automatic drops

pub const KEY_DOWN: u8 = b's';
pub const KEY_RIGHT: u8 = b'd';
pub const KEY_LEFT: u8 = b'a';
pub const KEY_ROTATE: u8 = b'w';
pub const KEY_QUIT: u8 = b'q';
