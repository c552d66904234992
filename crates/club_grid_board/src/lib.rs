//! Pure board logic for the club grid game.
//!
//! No I/O lives here: cells, marks, win/draw rules and the match state
//! machine. Verification against the football API and turn handling
//! live in the `club_grid` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod game;
pub mod rules;
mod types;

pub use cell::Cell;
pub use game::{Game, GameStatus, MarkError};
pub use types::{Board, Player, Square, Symbol};
