//! Club Grid library - football tic-tac-toe with verified claims
//!
//! Each row and column of a 3x3 board is labeled with a club. A player
//! claims a cell by naming someone who played for both the row's and
//! the column's club; the claim is checked against API-Football.
//!
//! # Architecture
//!
//! - **api**: [`FootballData`] trait and the [`ApiFootballClient`] HTTP source
//! - **clubs**: [`ClubSelector`] picks six clubs across leagues
//! - **verify**: [`PlayerChecker`] with its session-wide [`VerificationCache`]
//! - **controller**: [`TurnController`] drives selection, verification and turns
//! - **board** (`club_grid_board` crate): board, rules, [`Game`] state machine
//!
//! # Example
//!
//! ```no_run
//! use club_grid::{ApiFootballClient, ClubSelector, GridConfig, PlayerChecker, RngShuffler, TurnController};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GridConfig::default();
//! let client = ApiFootballClient::from_config(&config)?;
//! let selector = ClubSelector::new(
//!     config.leagues().clone(),
//!     config.season().clone(),
//!     *config.clubs_per_league(),
//!     RngShuffler::seeded(42),
//! );
//! let mut controller = TurnController::new(client, selector, PlayerChecker::new(config.season().clone()));
//! controller.start_match().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod clubs;
mod config;
mod controller;
mod error;
pub mod tui;
mod verify;

// Crate-level exports - Data source
pub use api::{
    ApiEnvelope, ApiFootballClient, Club, ClubId, FootballData, LeagueId, PlayerEntry, PlayerInfo,
    PlayerSearch, TeamEntry, TeamInfo,
};

// Crate-level exports - Club selection
pub use clubs::{CLUBS_NEEDED, ClubSelector, Criteria, NoShuffle, RngShuffler, Shuffler};

// Crate-level exports - Verification
pub use verify::{CacheKey, PlayerChecker, VerificationCache};

// Crate-level exports - Turn handling
pub use controller::{MatchSession, SelectOutcome, TurnController, TurnOutcome, describe};

// Crate-level exports - Configuration and errors
pub use config::{API_KEY_ENV, GridConfig};
pub use error::{ConfigError, ExternalServiceError, InsufficientDataError, ValidationError};

// Crate-level exports - Board types
pub use club_grid_board::{Board, Cell, Game, GameStatus, MarkError, Player, Square, Symbol};
