//! Command-line interface for time_travel_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "time_travel_tictactoe")]
#[command(about = "Tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show the move list newest-first
        #[arg(long)]
        reversed: bool,
    },

    /// Apply moves without a UI and print the resulting state
    Replay {
        /// Cell indices (0-8, row-major) in play order
        cells: Vec<usize>,

        /// Step to show after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Show the move list newest-first
        #[arg(long)]
        reversed: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
