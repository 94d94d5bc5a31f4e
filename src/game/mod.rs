pub mod board;
pub mod geometry;
pub mod piece;
pub mod shape;
pub mod state;

pub use board::Board;
pub use geometry::{collides, rotate_cw};
pub use piece::ActivePiece;
pub use shape::{random_shape, random_shape_with, Shape, ShapeKind};
pub use state::{Game, Gravity, Intent, Status};
