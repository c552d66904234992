//! Game rules.
//!
//! Pure functions over a [`Board`](super::Board), separated from board
//! storage so the state machine and the UI can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_win, check_winner, winning_line};
