use rand::Rng;

/// A square grid of cells; `true` marks a cell the piece occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    size: usize,
    cells: Vec<bool>,
}

impl Shape {
    /// Builds a shape from a row-major buffer of `size * size` cells.
    pub fn new(size: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), size * size, "shape must be square");
        Self { size, cells }
    }

    /// Builds a shape from rows of `0`/`1`, as the catalog is written.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&c| c != 0))
            .collect();
        Self::new(size, cells)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.size + col]
    }

    /// Occupied cells as `(row, col)` within the bounding box.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, occupied)| **occupied)
            .map(move |(i, _)| (i / size, i % size))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    fn rows(self) -> &'static [&'static [u8]] {
        const I: &[&[u8]] = &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]];
        const O: &[&[u8]] = &[&[0, 0, 0], &[1, 1, 0], &[1, 1, 0]];
        const T: &[&[u8]] = &[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]];
        const J: &[&[u8]] = &[&[0, 0, 0], &[1, 1, 1], &[1, 0, 0]];
        const L: &[&[u8]] = &[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]];
        const S: &[&[u8]] = &[&[0, 0, 0], &[1, 1, 0], &[0, 1, 1]];
        const Z: &[&[u8]] = &[&[0, 0, 0], &[0, 1, 1], &[1, 1, 0]];

        match self {
            ShapeKind::I => I,
            ShapeKind::O => O,
            ShapeKind::T => T,
            ShapeKind::J => J,
            ShapeKind::L => L,
            ShapeKind::S => S,
            ShapeKind::Z => Z,
        }
    }

    /// The catalog orientation of this kind.
    pub fn shape(self) -> Shape {
        Shape::from_rows(self.rows())
    }
}

pub fn random_kind_with<R: Rng + ?Sized>(rng: &mut R) -> ShapeKind {
    ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())]
}

pub fn random_shape_with<R: Rng + ?Sized>(rng: &mut R) -> Shape {
    random_kind_with(rng).shape()
}

pub fn random_shape() -> Shape {
    random_shape_with(&mut rand::thread_rng())
}
