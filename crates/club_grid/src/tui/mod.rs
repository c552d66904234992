//! Terminal UI for the club grid.

mod app;
mod input;
mod ui;

pub use app::{App, Pending};
pub use input::{Action, map_key, move_cursor};

use crate::api::FootballData;
use crate::clubs::Shuffler;
use crate::controller::TurnController;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
pub async fn run_tui<D, S>(controller: TurnController<D, S>) -> Result<()>
where
    D: FootballData,
    S: Shuffler,
{
    info!("Starting club grid TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(controller);
    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app<D, S>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<D, S>,
) -> Result<()>
where
    D: FootballData,
    S: Shuffler,
{
    app.begin(Pending::Restart);
    terminal.draw(|f| ui::draw(f, app))?;
    app.start().await;

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            info!("Quit requested");
            return Ok(());
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        let pending = app.handle(map_key(key, app.cursor()));
        if pending != Pending::None {
            app.begin(pending);
            terminal.draw(|f| ui::draw(f, app))?;
            app.run(pending).await;
        }
    }
}
