use crate::game::{Board, Shape};

/// True if any occupied cell of `shape`, placed at the given offsets, falls
/// outside the board or onto an occupied board cell.
///
/// Walls, floor, overlap and a blocked spawn are all the same test; callers
/// probe a prospective offset and commit only when this returns `false`.
pub fn collides(board: &Board, shape: &Shape, row_offset: i32, col_offset: i32) -> bool {
    shape.cells().any(|(y, x)| {
        let row = row_offset + y as i32;
        let col = col_offset + x as i32;
        board.get(row, col).unwrap_or(true)
    })
}

/// Rotates a square shape 90 degrees clockwise: `out[y][x] = in[size - 1 - x][y]`.
pub fn rotate_cw(shape: &Shape) -> Shape {
    let size = shape.size();
    let mut cells = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            cells.push(shape.get(size - 1 - x, y));
        }
    }
    Shape::new(size, cells)
}
