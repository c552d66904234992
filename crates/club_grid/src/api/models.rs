//! Wire payloads of the API-Football v3 service.

use crate::error::ExternalServiceError;
use serde::Deserialize;
use serde_json::Value;

/// Common response envelope: `{ errors, results, response: [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Empty array when the call succeeded, an object keyed by field otherwise.
    #[serde(default)]
    pub errors: Value,
    /// Number of entries in `response`.
    #[serde(default)]
    pub results: u32,
    /// Payload entries.
    #[serde(default = "Vec::new")]
    pub response: Vec<T>,
}

impl<T> ApiEnvelope<T> {
    /// Fails when the service reported errors inside the payload.
    pub fn into_checked(self) -> Result<Self, ExternalServiceError> {
        let has_errors = match &self.errors {
            Value::Null => false,
            Value::Array(items) => !items.is_empty(),
            Value::Object(fields) => !fields.is_empty(),
            Value::String(text) => !text.is_empty(),
            Value::Bool(_) | Value::Number(_) => true,
        };
        if has_errors {
            return Err(ExternalServiceError::Api(self.errors.to_string()));
        }
        Ok(self)
    }
}

/// Entry of `GET /teams`.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntry {
    /// The team itself; venue data is ignored.
    pub team: TeamInfo,
}

/// Team identity.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamInfo {
    /// Team id.
    pub id: u32,
    /// Team display name.
    pub name: String,
}

/// Entry of `GET /players`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntry {
    /// The player; statistics are ignored.
    pub player: PlayerInfo,
}

/// Player identity.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerInfo {
    /// Player display name, e.g. `"E. Haaland"`.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teams_payload_decodes() {
        let body = r#"{
            "get": "teams",
            "parameters": {"league": "39", "season": "2023"},
            "errors": [],
            "results": 2,
            "paging": {"current": 1, "total": 1},
            "response": [
                {"team": {"id": 33, "name": "Manchester United", "code": "MUN"}, "venue": {"id": 556}},
                {"team": {"id": 50, "name": "Manchester City"}, "venue": {}}
            ]
        }"#;
        let envelope: ApiEnvelope<TeamEntry> = serde_json::from_str(body).unwrap();
        let envelope = envelope.into_checked().unwrap();
        assert_eq!(envelope.results, 2);
        assert_eq!(envelope.response[1].team.id, 50);
    }

    #[test]
    fn test_error_object_is_api_error() {
        let body = r#"{"errors": {"token": "Error/Missing application key"}, "results": 0, "response": []}"#;
        let envelope: ApiEnvelope<PlayerEntry> = serde_json::from_str(body).unwrap();
        let err = envelope.into_checked().unwrap_err();
        assert!(matches!(err, ExternalServiceError::Api(ref msg) if msg.contains("token")));
    }

    #[test]
    fn test_players_payload_decodes() {
        let body = r#"{"errors": [], "results": 1, "response": [
            {"player": {"id": 1100, "name": "E. Haaland", "age": 23}, "statistics": []}
        ]}"#;
        let envelope: ApiEnvelope<PlayerEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.into_checked().unwrap().response[0].player.name, "E. Haaland");
    }
}
