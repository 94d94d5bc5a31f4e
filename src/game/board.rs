use crate::game::Shape;

/// Settled cells, row 0 at the top. Dimensions are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// `None` when the position is outside the board.
    pub fn get(&self, row: i32, col: i32) -> Option<bool> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[self.idx(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, occupied: bool) {
        let idx = self.idx(row, col);
        self.cells[idx] = occupied;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn is_row_complete(&self, row: usize) -> bool {
        let start = self.idx(row, 0);
        self.cells[start..start + self.width].iter().all(|c| *c)
    }

    /// Removes `row` and inserts an empty row at the top; rows above shift down.
    pub fn clear_row(&mut self, row: usize) {
        let end = self.idx(row, 0);
        self.cells.copy_within(0..end, self.width);
        self.cells[..self.width].fill(false);
    }

    /// Writes the occupied cells of `shape` into the board.
    ///
    /// The placement must already have been probed with
    /// [`collides`](crate::game::geometry::collides); cells that land outside
    /// the board are dropped.
    pub fn lock(&mut self, shape: &Shape, row_offset: i32, col_offset: i32) {
        for (y, x) in shape.cells() {
            let row = row_offset + y as i32;
            let col = col_offset + x as i32;
            if self.get(row, col).is_some() {
                self.set(row as usize, col as usize, true);
            }
        }
    }

    /// Clears every complete row, scanning top to bottom. Returns the count.
    pub fn clear_completed_rows(&mut self) -> u32 {
        let mut cleared = 0;
        // A clear only shifts rows above `row`, so the scan can keep going forward.
        for row in 0..self.height {
            if self.is_row_complete(row) {
                self.clear_row(row);
                cleared += 1;
            }
        }
        cleared
    }
}
