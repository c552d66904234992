//! Football data source.
//!
//! The game only needs two questions answered: which teams play in a
//! league, and which players of a team match a search string. Both sit
//! behind [`FootballData`] so the selector and the checker can run
//! against the live API or an in-memory fake.

mod client;
mod models;

pub use client::ApiFootballClient;
pub use models::{ApiEnvelope, PlayerEntry, PlayerInfo, TeamEntry, TeamInfo};

use crate::error::ExternalServiceError;
use async_trait::async_trait;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Numeric club identifier assigned by the data service.
pub type ClubId = u32;

/// Numeric league identifier assigned by the data service.
pub type LeagueId = u32;

/// A club that can label a row or a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Club {
    /// Service-assigned id.
    pub id: ClubId,
    /// Display name.
    #[new(into)]
    pub name: String,
}

impl std::fmt::Display for Club {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

/// Result of a roster search for one team.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct PlayerSearch {
    /// Result count as reported by the service.
    pub results: u32,
    /// Display names of the players returned.
    pub names: Vec<String>,
}

impl PlayerSearch {
    /// Case-insensitive substring match of `name` against the returned players.
    pub fn contains(&self, name: &str) -> bool {
        if self.results == 0 {
            return false;
        }
        let needle = name.trim().to_lowercase();
        self.names
            .iter()
            .any(|candidate| candidate.to_lowercase().contains(&needle))
    }
}

/// Read-only access to league and roster data.
#[async_trait]
pub trait FootballData: Send + Sync {
    /// Teams playing in `league` during `season`.
    async fn league_teams(
        &self,
        league: LeagueId,
        season: &str,
    ) -> Result<Vec<Club>, ExternalServiceError>;

    /// Players of `team` in `season` whose name matches `search`.
    async fn search_players(
        &self,
        team: ClubId,
        search: &str,
        season: &str,
    ) -> Result<PlayerSearch, ExternalServiceError>;
}
