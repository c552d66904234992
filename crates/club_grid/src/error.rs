//! Error types for club selection, verification and turn handling.

use derive_more::{Display, Error};
use tracing::{error, instrument};

/// Failure talking to the football data service.
///
/// Covers transport problems, non-2xx responses, payloads that do not
/// decode, and payloads whose `errors` field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ExternalServiceError {
    /// Request never produced a response.
    #[display("Request failed: {}", _0)]
    Transport(#[error(not(source))] String),

    /// Service answered with a non-success status.
    #[display("HTTP error {}: {}", status, body)]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// Response body was not the expected JSON.
    #[display("Failed to decode response: {}", _0)]
    Decode(#[error(not(source))] String),

    /// Service reported errors inside an otherwise valid payload.
    #[display("API error: {}", _0)]
    Api(#[error(not(source))] String),
}

impl From<reqwest::Error> for ExternalServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ExternalServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// The club selector could not assemble six clubs.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "Only {} clubs could be obtained from {} leagues (need {})",
    obtained,
    leagues_used,
    needed
)]
pub struct InsufficientDataError {
    /// Clubs collected before the league pool ran out.
    pub obtained: usize,
    /// Leagues that contributed at least one club.
    pub leagues_used: usize,
    /// Clubs required for a full set of criteria.
    pub needed: usize,
}

/// A submission rejected before any request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    /// No match in progress (not started, finished, or waiting on a request).
    #[display("No match in progress")]
    MatchInactive,

    /// Verification submitted without a selected cell.
    #[display("Select a cell first")]
    NoCellSelected,

    /// Player name was empty or whitespace.
    #[display("Enter a player name")]
    BlankName,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        error!(error_message = %message, "Config error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message_carries_count() {
        let err = InsufficientDataError {
            obtained: 4,
            leagues_used: 2,
            needed: 6,
        };
        assert_eq!(
            err.to_string(),
            "Only 4 clubs could be obtained from 2 leagues (need 6)"
        );
    }

    #[test]
    fn test_config_error_tracks_location() {
        let err = ConfigError::new("missing key");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().starts_with("Config error: missing key"));
    }
}
