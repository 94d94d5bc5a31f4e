use std::io;

use crate::{CELL_W, Game, HIDDEN_ROWS};

mod render;

pub use render::{draw_frame, restore_terminal, TerminalDisplay};

/// Anything that can show a composed frame.
pub trait DisplaySink {
    fn present(&mut self, frame: &FrameText) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    Locked,
    Active,
}

impl CellView {
    pub fn marker(self) -> char {
        match self {
            CellView::Empty => '.',
            CellView::Locked => '#',
            CellView::Active => '@',
        }
    }
}

/// The visible rows of the board with the active piece drawn over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameText {
    pub rows: Vec<Vec<CellView>>,
    pub score: u64,
}

impl FrameText {
    pub fn compose(game: &Game) -> Self {
        let mut rows: Vec<Vec<CellView>> = game
            .board
            .rows()
            .skip(HIDDEN_ROWS)
            .map(|row| {
                row.iter()
                    .map(|&occupied| if occupied { CellView::Locked } else { CellView::Empty })
                    .collect()
            })
            .collect();

        for (row, col) in game.current.cells() {
            if game.board.get(row, col).is_none() {
                continue;
            }
            let Some(visible) = (row as usize).checked_sub(HIDDEN_ROWS) else {
                continue;
            };
            rows[visible][col as usize] = CellView::Active;
        }

        Self {
            rows,
            score: game.score,
        }
    }

    /// One string per row, each cell `CELL_W` characters wide.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                let mut line = String::with_capacity(row.len() * CELL_W);
                for cell in row {
                    line.push(cell.marker());
                    line.push(' ');
                }
                line
            })
            .collect()
    }
}
