//! HTTP client for the API-Football v3 service.

use super::models::{ApiEnvelope, PlayerEntry, TeamEntry};
use super::{Club, ClubId, FootballData, LeagueId, PlayerSearch};
use crate::config::GridConfig;
use crate::error::{ConfigError, ExternalServiceError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Header carrying the per-process credential.
const API_KEY_HEADER: &str = "x-apisports-key";

/// Live data source backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ApiFootballClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiFootballClient {
    /// Creates a client with the credential header installed.
    #[instrument(skip(api_key))]
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| ConfigError::new(format!("Invalid API key: {}", e)))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.trim_end_matches('/').to_string();
        info!("Created football API client");
        Ok(Self { base_url, client })
    }

    /// Creates a client from configuration, resolving the credential.
    #[instrument(skip(config))]
    pub fn from_config(config: &GridConfig) -> Result<Self, ConfigError> {
        let api_key = config.resolve_api_key()?;
        Self::new(
            config.api_url(),
            &api_key,
            Duration::from_secs(*config.request_timeout_secs()),
        )
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET and decodes the checked envelope.
    #[instrument(skip(self, params))]
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<ApiEnvelope<T>, ExternalServiceError> {
        let url = reqwest::Url::parse_with_params(&format!("{}/{}", self.base_url, endpoint), params)
            .map_err(|e| ExternalServiceError::Transport(format!("Invalid URL: {}", e)))?;
        debug!(%url, "Sending request");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = ?e, endpoint, "Request failed");
            ExternalServiceError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = %status, body = %body, endpoint, "Service returned an error status");
            return Err(ExternalServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ApiEnvelope<T> = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, endpoint, "Failed to decode response");
            ExternalServiceError::from(e)
        })?;
        let envelope = envelope.into_checked()?;
        debug!(results = envelope.results, endpoint, "Response decoded");
        Ok(envelope)
    }
}

#[async_trait]
impl FootballData for ApiFootballClient {
    #[instrument(skip(self))]
    async fn league_teams(
        &self,
        league: LeagueId,
        season: &str,
    ) -> Result<Vec<Club>, ExternalServiceError> {
        let envelope: ApiEnvelope<TeamEntry> = self
            .get(
                "teams",
                &[("league", league.to_string()), ("season", season.to_string())],
            )
            .await?;

        Ok(envelope
            .response
            .into_iter()
            .map(|entry| Club::new(entry.team.id, entry.team.name))
            .collect())
    }

    #[instrument(skip(self))]
    async fn search_players(
        &self,
        team: ClubId,
        search: &str,
        season: &str,
    ) -> Result<PlayerSearch, ExternalServiceError> {
        let envelope: ApiEnvelope<PlayerEntry> = self
            .get(
                "players",
                &[
                    ("team", team.to_string()),
                    ("search", search.to_string()),
                    ("season", season.to_string()),
                ],
            )
            .await?;

        Ok(PlayerSearch::new(
            envelope.results,
            envelope
                .response
                .into_iter()
                .map(|entry| entry.player.name)
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client =
            ApiFootballClient::new("https://example.test/", "key", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "https://example.test");
    }

    #[test]
    fn test_invalid_key_is_config_error() {
        let err = ApiFootballClient::new("https://example.test", "bad\nkey", Duration::from_secs(1))
            .unwrap_err();
        assert!(err.message.contains("Invalid API key"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client =
            ApiFootballClient::new("http://127.0.0.1:9", "key", Duration::from_millis(500)).unwrap();
        let err = client.league_teams(39, "2023").await.unwrap_err();
        assert!(matches!(err, ExternalServiceError::Transport(_)));
    }
}
