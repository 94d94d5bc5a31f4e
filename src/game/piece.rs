use crate::game::Shape;

/// The falling piece: its current orientation and board-relative offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub shape: Shape,
    pub row: i32,
    pub col: i32,
}

impl ActivePiece {
    pub fn new(shape: Shape, row: i32, col: i32) -> Self {
        Self { shape, row, col }
    }

    /// Places `shape` on the top row, horizontally centered.
    pub fn spawn(shape: Shape, board_width: usize) -> Self {
        let col = (board_width / 2) as i32 - (shape.size() / 2) as i32;
        Self::new(shape, 0, col)
    }

    /// Board positions `(row, col)` covered by the piece.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(|(y, x)| (self.row + y as i32, self.col + x as i32))
    }

    pub fn shifted(&self, d_row: i32, d_col: i32) -> Self {
        let mut next = self.clone();
        next.row += d_row;
        next.col += d_col;
        next
    }
}
