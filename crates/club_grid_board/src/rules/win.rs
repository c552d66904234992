//! Win detection logic.

use super::super::{Board, Cell, Player, Square, Symbol};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Cell; 3]; 8] = {
    let c = Cell::ALL;
    [
        // Rows
        [c[0], c[1], c[2]],
        [c[3], c[4], c[5]],
        [c[6], c[7], c[8]],
        // Columns
        [c[0], c[3], c[6]],
        [c[1], c[4], c[7]],
        [c[2], c[5], c[8]],
        // Diagonals
        [c[0], c[4], c[8]],
        [c[2], c[4], c[6]],
    ]
};

/// Checks whether `symbol` holds a complete line.
#[instrument(skip(board))]
pub fn check_win(board: &Board, symbol: Symbol) -> bool {
    winning_line(board, symbol).is_some()
}

/// Returns the first complete line held by `symbol`.
pub fn winning_line(board: &Board, symbol: Symbol) -> Option<[Cell; 3]> {
    let target = Square::Taken(symbol);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|cell| board.get(*cell) == target))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if a player has three in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Symbol::X, Symbol::O]
        .into_iter()
        .find(|symbol| check_win(board, *symbol))
        .map(Player::from_symbol)
}
