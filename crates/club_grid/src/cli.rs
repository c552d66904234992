//! Command-line interface for club_grid.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Club Grid - football tic-tac-toe verified against API-Football
#[derive(Parser, Debug)]
#[command(name = "club_grid")]
#[command(about = "Claim cells by naming players who played for both clubs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "club_grid.toml")]
    pub config: PathBuf,

    /// Seed for league and club shuffling (random when omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Override the configured season
    #[arg(long, global = true)]
    pub season: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Log file (the terminal is owned by the UI)
        #[arg(long, default_value = "club_grid.log")]
        log_file: PathBuf,
    },

    /// Select a criteria set and print it
    Clubs,

    /// Check whether a player appeared for both clubs
    Check {
        /// Player name (substring, case-insensitive)
        name: String,

        /// Row club id
        club_a: u32,

        /// Column club id
        club_b: u32,
    },
}
