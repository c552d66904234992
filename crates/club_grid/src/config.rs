//! Game configuration: data source, season and league pool.

use crate::api::LeagueId;
use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "APISPORTS_KEY";

/// Configuration for a club grid session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GridConfig {
    /// Base URL of the football data service.
    #[serde(default = "default_api_url")]
    api_url: String,

    /// Credential sent in the `x-apisports-key` header.
    /// Falls back to the `APISPORTS_KEY` environment variable.
    #[serde(default)]
    api_key: Option<String>,

    /// Season whose rosters are checked.
    #[serde(default = "default_season")]
    season: String,

    /// League pool the club selector draws from.
    #[serde(default = "default_leagues")]
    leagues: Vec<LeagueId>,

    /// Maximum clubs taken from a single league.
    #[serde(default = "default_clubs_per_league")]
    clubs_per_league: usize,

    /// Per-request timeout for the HTTP client.
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://v3.football.api-sports.io".to_string()
}

fn default_season() -> String {
    "2023".to_string()
}

fn default_leagues() -> Vec<LeagueId> {
    vec![39, 140, 78, 61, 135, 45, 107, 34]
}

fn default_clubs_per_league() -> usize {
    2
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            season: default_season(),
            leagues: default_leagues(),
            clubs_per_league: default_clubs_per_league(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl GridConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            season = %config.season,
            leagues = config.leagues.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file when it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the configured credential, or the one from the environment.
    #[instrument(skip(self))]
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            return Ok(key.clone());
        }
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::new(format!("{} environment variable not set", API_KEY_ENV))
            })
    }

    /// Overrides the season.
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = season.into();
        self
    }

    /// Overrides the league pool.
    pub fn with_leagues(mut self, leagues: Vec<LeagueId>) -> Self {
        self.leagues = leagues;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.leagues.is_empty() {
            return Err(ConfigError::new("League pool is empty"));
        }
        if self.clubs_per_league == 0 {
            return Err(ConfigError::new("clubs_per_league must be at least 1"));
        }
        if self.season.trim().is_empty() {
            return Err(ConfigError::new("Season is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = GridConfig::from_toml("").unwrap();
        assert_eq!(config, GridConfig::default());
        assert_eq!(config.leagues().len(), 8);
        assert_eq!(config.season(), "2023");
    }

    #[test]
    fn test_partial_file_overrides() {
        let config = GridConfig::from_toml(
            r#"
            season = "2022"
            leagues = [39, 140, 78]
            api_key = "abc"
            "#,
        )
        .unwrap();
        assert_eq!(config.season(), "2022");
        assert_eq!(config.leagues(), &vec![39, 140, 78]);
        assert_eq!(*config.clubs_per_league(), 2);
        assert_eq!(config.resolve_api_key().unwrap(), "abc");
    }

    #[test]
    fn test_empty_league_pool_rejected() {
        let err = GridConfig::from_toml("leagues = []").unwrap_err();
        assert!(err.message.contains("League pool"));
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("club_grid.toml");
        assert_eq!(GridConfig::load_or_default(&path).unwrap(), GridConfig::default());

        std::fs::write(&path, "clubs_per_league = 3\n").unwrap();
        let config = GridConfig::load_or_default(&path).unwrap();
        assert_eq!(*config.clubs_per_league(), 3);
    }
}
