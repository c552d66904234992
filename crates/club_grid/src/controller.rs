//! Turn controller: cell selection, name entry, verification, transitions.
//!
//! Every user action maps to one method returning a descriptor of what
//! happened. Rendering reads the controller afterwards; nothing here
//! knows about the terminal.

use crate::api::{ClubId, FootballData};
use crate::clubs::{ClubSelector, Criteria, Shuffler};
use crate::error::{ExternalServiceError, InsufficientDataError, ValidationError};
use crate::verify::PlayerChecker;
use club_grid_board::{Cell, Game, GameStatus, Player};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// State of one match. Replaced wholesale on restart.
#[derive(Debug, Clone)]
pub struct MatchSession {
    criteria: Criteria,
    game: Game,
    active: Player,
    selected: Option<Cell>,
    pending: bool,
    answers: HashMap<Cell, String>,
}

impl MatchSession {
    /// Fresh match: empty board, player one to move, nothing selected.
    pub fn new(criteria: Criteria) -> Self {
        Self {
            criteria,
            game: Game::new(),
            active: Player::One,
            selected: None,
            pending: false,
            answers: HashMap::new(),
        }
    }

    /// Row and column clubs.
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Board and status.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Player whose turn it is. The active symbol is `active().symbol()`.
    pub fn active(&self) -> Player {
        self.active
    }

    /// Currently selected cell.
    pub fn selected(&self) -> Option<Cell> {
        self.selected
    }

    /// True while a verification request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// True while marks are accepted.
    pub fn is_active(&self) -> bool {
        self.game.status() == GameStatus::InProgress
    }

    /// Player name that claimed a cell.
    pub fn answer(&self, cell: Cell) -> Option<&str> {
        self.answers.get(&cell).map(String::as_str)
    }

    fn toggle_turn(&mut self) {
        self.active = self.active.opponent();
    }
}

/// Result of a cell click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Cell is now selected; `replaced` is the previous selection.
    Selected {
        /// The new selection.
        cell: Cell,
        /// Selection that was dropped, if any.
        replaced: Option<Cell>,
    },
    /// Click had no effect (no active match, request pending, or cell taken).
    Ignored,
}

/// Result of a verification that reached the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Player verified; cell claimed; turn passed to `next`.
    Correct {
        /// Claimed cell.
        cell: Cell,
        /// Player who claimed it.
        player: Player,
        /// Player to move next.
        next: Player,
    },
    /// Player verified and the claim completed a line.
    Won {
        /// Claimed cell.
        cell: Cell,
        /// Winner.
        player: Player,
    },
    /// Player verified and the claim filled the board without a line.
    Draw {
        /// Claimed cell.
        cell: Cell,
        /// Player who made the last claim.
        player: Player,
    },
    /// Player not on both rosters; cell stays free, turn consumed.
    WrongGuess {
        /// Cell that was attempted.
        cell: Cell,
        /// Player who guessed.
        player: Player,
        /// Player to move next.
        next: Player,
    },
    /// Lookup failed; turn not consumed, nothing cached.
    ServiceFailed {
        /// Cell that was attempted.
        cell: Cell,
        /// Underlying failure.
        error: ExternalServiceError,
    },
}

/// Orchestrates club selection, verification and the board state machine.
///
/// The verification cache lives in the checker and outlives matches;
/// everything per-match lives in [`MatchSession`].
#[derive(Debug)]
pub struct TurnController<D, S> {
    data: D,
    selector: ClubSelector<S>,
    checker: PlayerChecker,
    session: Option<MatchSession>,
    message: String,
}

impl<D, S> TurnController<D, S>
where
    D: FootballData,
    S: Shuffler,
{
    /// Creates a controller. No match exists until [`start_match`](Self::start_match).
    pub fn new(data: D, selector: ClubSelector<S>, checker: PlayerChecker) -> Self {
        Self {
            data,
            selector,
            checker,
            session: None,
            message: String::new(),
        }
    }

    /// Current match, if one could be started.
    pub fn session(&self) -> Option<&MatchSession> {
        self.session.as_ref()
    }

    /// Verification answers collected this process.
    pub fn checker(&self) -> &PlayerChecker {
        &self.checker
    }

    /// Data source in use.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Status line for the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Turn indicator, e.g. `Turn: Player 1 (X)`.
    pub fn turn_indicator(&self) -> String {
        match &self.session {
            Some(session) => format!("Turn: {}", session.active()),
            None => "Turn: -".to_string(),
        }
    }

    /// Verify is possible: cell selected, match in progress, nothing pending.
    pub fn verify_enabled(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.is_active() && !s.pending && s.selected.is_some())
    }

    /// Restart is offered once a match ends, or when none could be started.
    pub fn restart_available(&self) -> bool {
        self.session.as_ref().is_none_or(|s| !s.is_active())
    }

    /// Starts a match with freshly selected criteria.
    #[instrument(skip(self))]
    pub async fn start_match(&mut self) -> Result<&MatchSession, InsufficientDataError> {
        self.session = None;
        self.message = "Loading clubs from different leagues...".to_string();
        info!("Starting match");

        match self.selector.select_criteria(&self.data).await {
            Ok(criteria) => {
                info!(
                    rows = ?criteria.rows().iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
                    columns = ?criteria.columns().iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
                    "Criteria ready"
                );
                self.message = "Game on!".to_string();
                let session = self.session.insert(MatchSession::new(criteria));
                Ok(&*session)
            }
            Err(e) => {
                warn!(error = %e, "Could not start match");
                self.message = format!("Error: {}", e);
                Err(e)
            }
        }
    }

    /// Discards the current match and starts a new one. The cache is kept.
    #[instrument(skip(self))]
    pub async fn restart_match(&mut self) -> Result<&MatchSession, InsufficientDataError> {
        info!(cached = self.checker.cache().len(), "Restarting match");
        self.start_match().await
    }

    /// Selects a cell for the next verification.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, cell: Cell) -> SelectOutcome {
        let Some(session) = self.session.as_mut() else {
            return SelectOutcome::Ignored;
        };
        if !session.is_active() || session.pending || session.game.is_taken(cell) {
            debug!("Selection ignored");
            return SelectOutcome::Ignored;
        }

        let replaced = session.selected.replace(cell);
        debug!(?replaced, "Cell selected");
        SelectOutcome::Selected { cell, replaced }
    }

    /// Verifies `name` for the selected cell and applies the result.
    ///
    /// Local problems (no match, no selection, blank name) return a
    /// [`ValidationError`] and change nothing. Everything else yields a
    /// [`TurnOutcome`]; the selection is always cleared afterwards.
    #[instrument(skip(self))]
    pub async fn submit_verification(&mut self, name: &str) -> Result<TurnOutcome, ValidationError> {
        let (cell, club_a, club_b, player) = match self.prepare(name) {
            Ok(prepared) => prepared,
            Err(e) => {
                debug!(error = %e, "Submission rejected");
                self.message = e.to_string();
                return Err(e);
            }
        };
        let name = name.trim();

        self.message = "Verifying...".to_string();
        if let Some(session) = self.session.as_mut() {
            session.pending = true;
        }

        let result = self
            .checker
            .check_player_on_both_clubs(&self.data, name, club_a, club_b)
            .await;

        let Some(session) = self.session.as_mut() else {
            return Err(ValidationError::MatchInactive);
        };
        session.pending = false;
        session.selected = None;

        let outcome = match result {
            Ok(true) => Self::claim(session, cell, player, name),
            Ok(false) => {
                session.toggle_turn();
                TurnOutcome::WrongGuess {
                    cell,
                    player,
                    next: session.active,
                }
            }
            Err(error) => {
                warn!(error = %error, "Verification failed, turn kept");
                TurnOutcome::ServiceFailed { cell, error }
            }
        };

        self.message = describe(&outcome);
        info!(?outcome, "Turn resolved");
        Ok(outcome)
    }

    fn prepare(&self, name: &str) -> Result<(Cell, ClubId, ClubId, Player), ValidationError> {
        let session = self
            .session
            .as_ref()
            .filter(|s| s.is_active() && !s.pending)
            .ok_or(ValidationError::MatchInactive)?;
        let cell = session.selected.ok_or(ValidationError::NoCellSelected)?;
        if name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        let (club_a, club_b) = session.criteria.club_ids_for(cell);
        Ok((cell, club_a, club_b, session.active))
    }

    fn claim(session: &mut MatchSession, cell: Cell, player: Player, name: &str) -> TurnOutcome {
        match session.game.mark(cell, player) {
            Ok(GameStatus::Won(winner)) => {
                session.answers.insert(cell, name.to_uppercase());
                TurnOutcome::Won {
                    cell,
                    player: winner,
                }
            }
            Ok(GameStatus::Draw) => {
                session.answers.insert(cell, name.to_uppercase());
                TurnOutcome::Draw { cell, player }
            }
            Ok(GameStatus::InProgress) => {
                session.answers.insert(cell, name.to_uppercase());
                session.toggle_turn();
                TurnOutcome::Correct {
                    cell,
                    player,
                    next: session.active,
                }
            }
            // Selection is only granted on free cells of an active game
            // and nothing else mutates the board while a request is pending.
            Err(e) => {
                warn!(error = %e, "Verified cell could not be marked");
                TurnOutcome::ServiceFailed {
                    cell,
                    error: ExternalServiceError::Api(e.to_string()),
                }
            }
        }
    }
}

/// User-facing text for an outcome.
pub fn describe(outcome: &TurnOutcome) -> String {
    match outcome {
        TurnOutcome::Correct { .. } => "✓ Correct!".to_string(),
        TurnOutcome::Won { player, .. } => format!("🎉 {} wins!", player),
        TurnOutcome::Draw { .. } => "🤝 Draw!".to_string(),
        TurnOutcome::WrongGuess { .. } => "✗ Wrong player. Turn skipped.".to_string(),
        TurnOutcome::ServiceFailed { .. } => "Verification error, try again.".to_string(),
    }
}

