//! Cell coordinates on the 3x3 grid.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell addressed by row and column (both 0-2).
///
/// Rows are labeled by one club and columns by another, so a cell is
/// always the intersection of two clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// The middle cell.
    pub const CENTER: Cell = Cell { row: 1, col: 1 };

    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 1 },
        Cell { row: 0, col: 2 },
        Cell { row: 1, col: 0 },
        Cell { row: 1, col: 1 },
        Cell { row: 1, col: 2 },
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 1 },
        Cell { row: 2, col: 2 },
    ];

    /// Creates a cell, returning `None` when out of bounds.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates a cell from its row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Neighbour one step up, clamped to the board edge.
    pub fn up(self) -> Self {
        Self {
            row: self.row.saturating_sub(1),
            ..self
        }
    }

    /// Neighbour one step down, clamped to the board edge.
    pub fn down(self) -> Self {
        Self {
            row: (self.row + 1).min(2),
            ..self
        }
    }

    /// Neighbour one step left, clamped to the board edge.
    pub fn left(self) -> Self {
        Self {
            col: self.col.saturating_sub(1),
            ..self
        }
    }

    /// Neighbour one step right, clamped to the board edge.
    pub fn right(self) -> Self {
        Self {
            col: (self.col + 1).min(2),
            ..self
        }
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({},{})", self.label(), self.row, self.col)
    }
}
