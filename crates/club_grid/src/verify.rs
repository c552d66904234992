//! Player verification with a session-wide answer cache.

use crate::api::{ClubId, FootballData};
use crate::error::ExternalServiceError;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Identifies a memoized answer.
///
/// Club order is significant: it mirrors the row club and column club
/// of the cell being claimed. The name is trimmed and lowercased since
/// matching ignores case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    name: String,
    club_a: ClubId,
    club_b: ClubId,
}

impl CacheKey {
    /// Builds a normalized key.
    pub fn new(name: &str, club_a: ClubId, club_b: ClubId) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            club_a,
            club_b,
        }
    }

    /// Normalized player name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Append-only map of verification answers.
///
/// Entries are never invalidated or expired; a `false` is as final as
/// a `true`. Failed lookups are never stored.
#[derive(Debug, Clone, Default)]
pub struct VerificationCache {
    entries: HashMap<CacheKey, bool>,
}

impl VerificationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached answer, if any.
    pub fn get(&self, key: &CacheKey) -> Option<bool> {
        self.entries.get(key).copied()
    }

    /// Stores an answer. An existing answer for the key is kept.
    pub fn insert(&mut self, key: CacheKey, found: bool) -> bool {
        *self.entries.entry(key).or_insert(found)
    }

    /// Number of cached answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Answers "has this player appeared for both clubs" for one season.
#[derive(Debug, Clone)]
pub struct PlayerChecker {
    season: String,
    cache: VerificationCache,
}

impl PlayerChecker {
    /// Creates a checker with an empty cache.
    pub fn new(season: impl Into<String>) -> Self {
        Self {
            season: season.into(),
            cache: VerificationCache::new(),
        }
    }

    /// Season whose rosters are searched.
    pub fn season(&self) -> &str {
        &self.season
    }

    /// The answers collected so far.
    pub fn cache(&self) -> &VerificationCache {
        &self.cache
    }

    /// Checks whether `name` appears on both rosters.
    ///
    /// A cached answer is returned without any request. Otherwise club
    /// A is searched first and club B only when A matched. `false` is a
    /// regular, cached answer; an [`ExternalServiceError`] leaves the
    /// cache untouched.
    #[instrument(skip(self, data), fields(season = %self.season))]
    pub async fn check_player_on_both_clubs<D>(
        &mut self,
        data: &D,
        name: &str,
        club_a: ClubId,
        club_b: ClubId,
    ) -> Result<bool, ExternalServiceError>
    where
        D: FootballData + ?Sized,
    {
        let key = CacheKey::new(name, club_a, club_b);
        if let Some(found) = self.cache.get(&key) {
            debug!(found, "Cache hit");
            return Ok(found);
        }

        let search = name.trim();
        let on_a = data
            .search_players(club_a, search, &self.season)
            .await?
            .contains(search);

        let found = if on_a {
            data.search_players(club_b, search, &self.season)
                .await?
                .contains(search)
        } else {
            debug!(club_a, "Not on first club, skipping second lookup");
            false
        };

        info!(found, "Verification resolved");
        Ok(self.cache.insert(key, found))
    }
}
