//! Application state for the terminal front end.

use super::input::Action;
use crate::api::FootballData;
use crate::clubs::Shuffler;
use crate::controller::{SelectOutcome, TurnController};
use club_grid_board::Cell;
use tracing::{debug, info};

/// Terminal-side state around a [`TurnController`].
pub struct App<D, S> {
    controller: TurnController<D, S>,
    cursor: Cell,
    input: String,
    busy: Option<&'static str>,
    quit: bool,
}

/// Work the event loop must await after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// Nothing to await.
    None,
    /// Verify the typed name.
    Verify,
    /// Select clubs for a new match.
    Restart,
}

impl<D: FootballData, S: Shuffler> App<D, S> {
    /// Creates the application around a controller.
    pub fn new(controller: TurnController<D, S>) -> Self {
        Self {
            controller,
            cursor: Cell::CENTER,
            input: String::new(),
            busy: None,
            quit: false,
        }
    }

    /// The controller.
    pub fn controller(&self) -> &TurnController<D, S> {
        &self.controller
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Player name typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Label shown while a request is outstanding.
    pub fn busy(&self) -> Option<&'static str> {
        self.busy
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies a synchronous action and reports follow-up work.
    pub fn handle(&mut self, action: Action) -> Pending {
        debug!(?action, "Handling action");
        match action {
            Action::Quit => {
                self.quit = true;
                Pending::None
            }
            Action::Cursor(cell) => {
                self.cursor = cell;
                Pending::None
            }
            Action::Select => {
                if let SelectOutcome::Selected { cell, .. } = self.controller.select_cell(self.cursor) {
                    info!(%cell, "Cell selected");
                }
                Pending::None
            }
            Action::Type(c) => {
                self.input.push(c);
                Pending::None
            }
            Action::Backspace => {
                self.input.pop();
                Pending::None
            }
            Action::Submit => Pending::Verify,
            Action::Restart if self.controller.restart_available() => Pending::Restart,
            Action::Restart | Action::Nothing => Pending::None,
        }
    }

    /// Marks the app busy before awaiting `pending`.
    pub fn begin(&mut self, pending: Pending) {
        self.busy = match pending {
            Pending::Verify => Some("Verifying..."),
            Pending::Restart => Some("Loading clubs from different leagues..."),
            Pending::None => None,
        };
    }

    /// Runs the awaited part of an action.
    pub async fn run(&mut self, pending: Pending) {
        match pending {
            Pending::None => {}
            Pending::Verify => {
                // Validation failures already set the controller message.
                if self.controller.submit_verification(&self.input).await.is_ok() {
                    self.input.clear();
                }
            }
            Pending::Restart => {
                if self.controller.restart_match().await.is_ok() {
                    self.input.clear();
                    self.cursor = Cell::CENTER;
                }
            }
        }
        self.busy = None;
    }

    /// Starts the first match. A failure leaves restart available.
    pub async fn start(&mut self) {
        let _ = self.controller.start_match().await;
        self.busy = None;
    }
}
