//! Match state machine.
//!
//! The game does not track whose turn it is: in the club grid a wrong
//! guess consumes a turn without touching the board, so turn order is
//! owned by the caller. The game only accepts marks and reports the
//! resulting status.

use super::rules;
use super::{Board, Cell, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Board filled without a line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Error that can occur when applying a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MarkError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The cell already carries a mark.
    #[display("Cell {} is already taken", _0)]
    CellTaken(Cell),
}

impl std::error::Error for MarkError {}

/// Tic-tac-toe state machine: `InProgress` until a line or a full board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
    history: Vec<(Cell, Player)>,
}

impl Game {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Marks applied so far, in order.
    pub fn history(&self) -> &[(Cell, Player)] {
        &self.history
    }

    /// Checks whether a cell is already marked.
    pub fn is_taken(&self, cell: Cell) -> bool {
        !self.board.is_empty(cell)
    }

    /// Marks `cell` with `player`'s symbol and evaluates the result.
    ///
    /// The win check runs after the mark is applied and only looks at
    /// the symbol that just moved; the draw check only runs when that
    /// fails, so a full board with a line is always `Won`.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn mark(&mut self, cell: Cell, player: Player) -> Result<GameStatus, MarkError> {
        if self.status.is_over() {
            return Err(MarkError::GameOver);
        }
        if self.is_taken(cell) {
            return Err(MarkError::CellTaken(cell));
        }

        self.board.set(cell, Square::Taken(player.symbol()));
        self.history.push((cell, player));
        debug!(%cell, %player, "Mark applied");

        if rules::check_win(&self.board, player.symbol()) {
            self.status = GameStatus::Won(player);
            info!(%player, "Line completed");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("Board full without a line");
        }

        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col).unwrap()
    }

    #[test]
    fn test_completing_top_row_wins() {
        // [[X,X,_],[_,O,_],[_,_,O]] then X at (0,2)
        let mut game = Game::new();
        game.mark(cell(0, 0), Player::One).unwrap();
        game.mark(cell(1, 1), Player::Two).unwrap();
        game.mark(cell(0, 1), Player::One).unwrap();
        game.mark(cell(2, 2), Player::Two).unwrap();
        let status = game.mark(cell(0, 2), Player::One).unwrap();
        assert_eq!(status, GameStatus::Won(Player::One));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / O X X / O X O
        let moves = [
            ((0, 0), Player::One),
            ((0, 1), Player::Two),
            ((0, 2), Player::One),
            ((1, 0), Player::Two),
            ((1, 1), Player::One),
            ((2, 0), Player::Two),
            ((1, 2), Player::One),
            ((2, 2), Player::Two),
        ];
        let mut game = Game::new();
        for ((r, c), p) in moves {
            assert_eq!(game.mark(cell(r, c), p).unwrap(), GameStatus::InProgress);
        }
        assert_eq!(game.mark(cell(2, 1), Player::One).unwrap(), GameStatus::Draw);
    }

    #[test]
    fn test_last_cell_completing_line_is_win_not_draw() {
        // X O X / O O X / O X _  then X at (2,2) fills the board and the right column
        let moves = [
            ((0, 0), Player::One),
            ((0, 1), Player::Two),
            ((0, 2), Player::One),
            ((1, 0), Player::Two),
            ((1, 2), Player::One),
            ((1, 1), Player::Two),
            ((2, 1), Player::One),
            ((2, 0), Player::Two),
        ];
        let mut game = Game::new();
        for ((r, c), p) in moves {
            game.mark(cell(r, c), p).unwrap();
        }
        assert_eq!(
            game.mark(cell(2, 2), Player::One).unwrap(),
            GameStatus::Won(Player::One)
        );
    }

    #[test]
    fn test_taken_cell_is_rejected() {
        let mut game = Game::new();
        game.mark(Cell::CENTER, Player::One).unwrap();
        assert_eq!(
            game.mark(Cell::CENTER, Player::Two),
            Err(MarkError::CellTaken(Cell::CENTER))
        );
        assert_eq!(game.board().get(Cell::CENTER), Square::Taken(Symbol::X));
    }

    #[test]
    fn test_terminal_game_rejects_marks() {
        let mut game = Game::new();
        for col in 0..3 {
            game.mark(cell(0, col), Player::Two).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::Two));
        assert_eq!(game.mark(Cell::CENTER, Player::One), Err(MarkError::GameOver));
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_status_serializes() {
        let json = serde_json::to_string(&GameStatus::Won(Player::Two)).unwrap();
        let back: GameStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GameStatus::Won(Player::Two));
    }
}
