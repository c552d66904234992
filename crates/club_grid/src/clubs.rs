//! Club selection: six clubs from several leagues become the match criteria.

use crate::api::{Club, ClubId, FootballData, LeagueId};
use crate::error::InsufficientDataError;
use club_grid_board::Cell;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Clubs needed for 3 rows and 3 columns.
pub const CLUBS_NEEDED: usize = 6;

/// Source of randomness for club selection.
///
/// League order and per-league team order are shuffled through separate
/// methods so tests can control each independently.
pub trait Shuffler {
    /// Reorders the league pool before it is walked.
    fn shuffle_leagues(&mut self, leagues: &mut [LeagueId]);

    /// Reorders a league's teams before the first few are taken.
    fn shuffle_clubs(&mut self, clubs: &mut [Club]);
}

/// [`Shuffler`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngShuffler<R> {
    rng: R,
}

impl<R: Rng> RngShuffler<R> {
    /// Wraps a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngShuffler<ChaCha8Rng> {
    /// Deterministic shuffler for reproducible matches.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Shuffler seeded from the thread generator.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl<R: Rng> Shuffler for RngShuffler<R> {
    fn shuffle_leagues(&mut self, leagues: &mut [LeagueId]) {
        leagues.shuffle(&mut self.rng);
    }

    fn shuffle_clubs(&mut self, clubs: &mut [Club]) {
        clubs.shuffle(&mut self.rng);
    }
}

/// Leaves both orders untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShuffle;

impl Shuffler for NoShuffle {
    fn shuffle_leagues(&mut self, _leagues: &mut [LeagueId]) {}

    fn shuffle_clubs(&mut self, _clubs: &mut [Club]) {}
}

/// The 3 row clubs and 3 column clubs of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    rows: [Club; 3],
    columns: [Club; 3],
}

impl Criteria {
    /// Splits six clubs: the first three label rows, the last three columns.
    pub fn from_clubs(clubs: [Club; CLUBS_NEEDED]) -> Self {
        let [r0, r1, r2, c0, c1, c2] = clubs;
        Self {
            rows: [r0, r1, r2],
            columns: [c0, c1, c2],
        }
    }

    /// Row clubs, top to bottom.
    pub fn rows(&self) -> &[Club; 3] {
        &self.rows
    }

    /// Column clubs, left to right.
    pub fn columns(&self) -> &[Club; 3] {
        &self.columns
    }

    /// Row club and column club of a cell, in that order.
    pub fn clubs_for(&self, cell: Cell) -> (&Club, &Club) {
        (&self.rows[cell.row()], &self.columns[cell.col()])
    }

    /// Row club id and column club id of a cell, in that order.
    pub fn club_ids_for(&self, cell: Cell) -> (ClubId, ClubId) {
        let (row, col) = self.clubs_for(cell);
        (row.id, col.id)
    }
}

/// Picks six distinct clubs spanning several leagues.
#[derive(Debug, Clone)]
pub struct ClubSelector<S> {
    leagues: Vec<LeagueId>,
    season: String,
    clubs_per_league: usize,
    shuffler: S,
}

impl<S: Shuffler> ClubSelector<S> {
    /// Creates a selector over a league pool.
    pub fn new(
        leagues: Vec<LeagueId>,
        season: impl Into<String>,
        clubs_per_league: usize,
        shuffler: S,
    ) -> Self {
        Self {
            leagues,
            season: season.into(),
            clubs_per_league,
            shuffler,
        }
    }

    /// League pool, in configured order.
    pub fn leagues(&self) -> &[LeagueId] {
        &self.leagues
    }

    /// Season requested for every league.
    pub fn season(&self) -> &str {
        &self.season
    }

    /// Collects six clubs, walking leagues in shuffled order.
    ///
    /// Leagues are requested one after another. A league whose request
    /// fails contributes nothing and the walk continues. Clubs already
    /// collected from an earlier league are skipped, so a cup sharing
    /// teams with a domestic league cannot put one club on both axes.
    #[instrument(skip(self, data), fields(season = %self.season, pool = self.leagues.len()))]
    pub async fn select_clubs<D>(&mut self, data: &D) -> Result<Vec<Club>, InsufficientDataError>
    where
        D: FootballData + ?Sized,
    {
        let mut leagues = self.leagues.clone();
        self.shuffler.shuffle_leagues(&mut leagues);
        debug!(?leagues, "League order");

        let mut clubs: Vec<Club> = Vec::with_capacity(CLUBS_NEEDED);
        let mut seen: HashSet<ClubId> = HashSet::new();
        let mut leagues_used = 0usize;

        for league in leagues {
            if clubs.len() >= CLUBS_NEEDED {
                break;
            }

            let mut teams = match data.league_teams(league, &self.season).await {
                Ok(teams) => teams,
                Err(e) => {
                    warn!(league, error = %e, "Could not fetch teams for league, skipping");
                    continue;
                }
            };

            self.shuffler.shuffle_clubs(&mut teams);
            let picked: Vec<Club> = teams
                .into_iter()
                .filter(|club| !seen.contains(&club.id))
                .take(self.clubs_per_league)
                .collect();

            if picked.is_empty() {
                debug!(league, "League contributed no new clubs");
                continue;
            }

            info!(league, count = picked.len(), "Added clubs from league");
            seen.extend(picked.iter().map(|club| club.id));
            clubs.extend(picked);
            leagues_used += 1;
        }

        info!(total = clubs.len(), leagues_used, "Club selection finished");

        if clubs.len() < CLUBS_NEEDED {
            warn!(obtained = clubs.len(), "Not enough clubs for a match");
            return Err(InsufficientDataError {
                obtained: clubs.len(),
                leagues_used,
                needed: CLUBS_NEEDED,
            });
        }

        clubs.truncate(CLUBS_NEEDED);
        Ok(clubs)
    }

    /// Selects clubs and splits them into row and column criteria.
    #[instrument(skip(self, data))]
    pub async fn select_criteria<D>(&mut self, data: &D) -> Result<Criteria, InsufficientDataError>
    where
        D: FootballData + ?Sized,
    {
        let clubs = self.select_clubs(data).await?;
        let obtained = clubs.len();
        let clubs: [Club; CLUBS_NEEDED] =
            clubs.try_into().map_err(|_| InsufficientDataError {
                obtained,
                leagues_used: 0,
                needed: CLUBS_NEEDED,
            })?;
        let criteria = Criteria::from_clubs(clubs);
        debug!(?criteria, "Criteria selected");
        Ok(criteria)
    }
}
