//! Core domain types for the club grid board.

use super::cell::Cell;
use serde::{Deserialize, Serialize};

/// Mark placed on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Symbol {
    /// Always belongs to player one.
    X,
    /// Always belongs to player two.
    O,
}

/// One of the two seats at the board.
///
/// A player's symbol is fixed for the whole match, so toggling the
/// active player also toggles the active symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Moves first, plays X.
    One,
    /// Moves second, plays O.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the symbol this player marks cells with.
    pub fn symbol(self) -> Symbol {
        match self {
            Player::One => Symbol::X,
            Player::Two => Symbol::O,
        }
    }

    /// Returns the player that owns a symbol.
    pub fn from_symbol(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => Player::One,
            Symbol::O => Player::Two,
        }
    }

    /// Human-readable label, e.g. `Player 1 (X)`.
    pub fn label(self) -> &'static str {
        match self {
            Player::One => "Player 1 (X)",
            Player::Two => "Player 2 (O)",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has claimed this square.
    Empty,
    /// Claimed with a symbol.
    Taken(Symbol),
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from rows, mostly useful for tests and fixtures.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut board = Self::new();
        for cell in Cell::ALL {
            board.set(cell, rows[cell.row()][cell.col()]);
        }
        board
    }

    /// Gets the square at a cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Sets the square at a cell.
    pub fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Cells that can still be claimed.
    pub fn free_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => ".".to_string(),
                    Square::Taken(symbol) => symbol.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_symbol_follows_player() {
        for player in Player::iter() {
            assert_eq!(Player::from_symbol(player.symbol()), player);
            assert_ne!(player.opponent().symbol(), player.symbol());
        }
        assert_eq!(Player::One.symbol(), Symbol::X);
        assert_eq!(Player::Two.symbol(), Symbol::O);
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let x = Square::Taken(Symbol::X);
        let e = Square::Empty;
        let board = Board::from_rows([[e, e, x], [e, e, e], [e, e, e]]);
        assert_eq!(board.squares()[2], x);
        assert_eq!(board.free_cells().len(), 8);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Cell::CENTER, Square::Taken(Symbol::O));
        assert_eq!(board.display(), ".|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
