//! Club Grid - Unified CLI
//!
//! Football tic-tac-toe in the terminal, plus one-shot club and player lookups.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use club_grid::{
    ApiFootballClient, ClubSelector, FootballData, GridConfig, PlayerChecker, RngShuffler,
    TurnController,
};
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Play {
        log_file: "club_grid.log".into(),
    });

    match command {
        Command::Play { log_file } => {
            initialize_file_tracing(&log_file)?;
            run_play(&cli).await
        }
        Command::Clubs => {
            initialize_tracing();
            run_clubs(&cli).await
        }
        Command::Check {
            name,
            club_a,
            club_b,
        } => {
            initialize_tracing();
            run_check(&cli, &name, club_a, club_b).await
        }
    }
}

/// Run the terminal game
async fn run_play(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let client = ApiFootballClient::from_config(&config)?;
    let controller = TurnController::new(
        client,
        build_selector(&config, cli.seed),
        PlayerChecker::new(config.season().clone()),
    );
    club_grid::tui::run_tui(controller).await
}

/// Select a criteria set and print it
#[instrument(skip(cli))]
async fn run_clubs(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let client = ApiFootballClient::from_config(&config)?;
    let mut selector = build_selector(&config, cli.seed);

    let criteria = selector.select_criteria(&client).await?;
    println!("Season {}", config.season());
    for (i, club) in criteria.rows().iter().enumerate() {
        println!("Row {}:    {}", i + 1, club);
    }
    for (i, club) in criteria.columns().iter().enumerate() {
        println!("Column {}: {}", i + 1, club);
    }
    Ok(())
}

/// One-shot verification of a player against two clubs
#[instrument(skip(cli))]
async fn run_check(cli: &Cli, name: &str, club_a: u32, club_b: u32) -> Result<()> {
    let config = load_config(cli)?;
    let client = ApiFootballClient::from_config(&config)?;
    let mut checker = PlayerChecker::new(config.season().clone());

    let found = check(&mut checker, &client, name, club_a, club_b).await?;
    if found {
        println!("✓ {} played for both {} and {}", name, club_a, club_b);
    } else {
        println!("✗ {} not found on both {} and {}", name, club_a, club_b);
    }
    Ok(())
}

async fn check<D: FootballData>(
    checker: &mut PlayerChecker,
    data: &D,
    name: &str,
    club_a: u32,
    club_b: u32,
) -> Result<bool> {
    if name.trim().is_empty() {
        anyhow::bail!("Enter a player name");
    }
    Ok(checker
        .check_player_on_both_clubs(data, name, club_a, club_b)
        .await?)
}

#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GridConfig> {
    info!("Loading configuration");
    let mut config = GridConfig::load_or_default(&cli.config)?;
    if let Some(season) = &cli.season {
        info!(%season, "Overriding season");
        config = config.with_season(season.clone());
    }
    Ok(config)
}

fn build_selector(config: &GridConfig, seed: Option<u64>) -> ClubSelector<RngShuffler<ChaCha8Rng>> {
    let shuffler = match seed {
        Some(seed) => {
            info!(seed, "Using seeded shuffler");
            RngShuffler::seeded(seed)
        }
        None => RngShuffler::from_entropy(),
    };
    ClubSelector::new(
        config.leagues().clone(),
        config.season().clone(),
        *config.clubs_per_league(),
        shuffler,
    )
}

fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,club_grid=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Setup logging to file to avoid interfering with TUI
fn initialize_file_tracing(path: &std::path::Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,club_grid=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
