//! In-memory football data source shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use club_grid::{Club, ClubId, ExternalServiceError, FootballData, LeagueId, PlayerSearch};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Fake data source that records every request.
#[derive(Debug, Default)]
pub struct FakeData {
    leagues: HashMap<LeagueId, Vec<Club>>,
    failing_leagues: HashSet<LeagueId>,
    rosters: HashMap<ClubId, Vec<String>>,
    players_down: AtomicBool,
    team_calls: AtomicUsize,
    player_calls: Mutex<Vec<ClubId>>,
}

impl FakeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a league whose teams have the given ids, named `Club <id>`.
    pub fn league(mut self, league: LeagueId, ids: &[ClubId]) -> Self {
        let clubs = ids.iter().map(|id| Club::new(*id, format!("Club {id}"))).collect();
        self.leagues.insert(league, clubs);
        self
    }

    /// Adds a league whose request always fails.
    pub fn failing_league(mut self, league: LeagueId) -> Self {
        self.failing_leagues.insert(league);
        self
    }

    /// Puts a player on each of the given clubs' rosters.
    pub fn player(mut self, name: &str, clubs: &[ClubId]) -> Self {
        for club in clubs {
            self.rosters.entry(*club).or_default().push(name.to_string());
        }
        self
    }

    /// Makes every roster search fail (or succeed again).
    pub fn set_players_down(&self, down: bool) {
        self.players_down.store(down, Ordering::SeqCst);
    }

    pub fn team_calls(&self) -> usize {
        self.team_calls.load(Ordering::SeqCst)
    }

    pub fn player_calls(&self) -> usize {
        self.player_calls.lock().unwrap().len()
    }

    /// Teams searched, in request order.
    pub fn searched_teams(&self) -> Vec<ClubId> {
        self.player_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FootballData for FakeData {
    async fn league_teams(
        &self,
        league: LeagueId,
        _season: &str,
    ) -> Result<Vec<Club>, ExternalServiceError> {
        self.team_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_leagues.contains(&league) {
            return Err(ExternalServiceError::Status {
                status: 500,
                body: "league unavailable".to_string(),
            });
        }
        Ok(self.leagues.get(&league).cloned().unwrap_or_default())
    }

    async fn search_players(
        &self,
        team: ClubId,
        search: &str,
        _season: &str,
    ) -> Result<PlayerSearch, ExternalServiceError> {
        self.player_calls.lock().unwrap().push(team);
        if self.players_down.load(Ordering::SeqCst) {
            return Err(ExternalServiceError::Transport("connection reset".to_string()));
        }
        let needle = search.to_lowercase();
        let names: Vec<String> = self
            .rosters
            .get(&team)
            .map(|roster| {
                roster
                    .iter()
                    .filter(|name| name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(PlayerSearch::new(names.len() as u32, names))
    }
}

/// Shuffler that reverses both orders, to observe that shuffling is applied.
#[derive(Debug, Default)]
pub struct Reverse;

impl club_grid::Shuffler for Reverse {
    fn shuffle_leagues(&mut self, leagues: &mut [LeagueId]) {
        leagues.reverse();
    }

    fn shuffle_clubs(&mut self, clubs: &mut [Club]) {
        clubs.reverse();
    }
}
