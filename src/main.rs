//! Time-travel tic-tac-toe - CLI
//!
//! Interactive terminal game or headless replay of a move list.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use time_travel_tictactoe::{GameState, GameSummary, UiConfig, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        config: None,
        reversed: false,
    }) {
        Command::Play { config, reversed } => run_play(config, reversed),
        Command::Replay {
            cells,
            jump,
            reversed,
            json,
        } => run_replay(&cells, jump, reversed, json),
    }
}

/// Run the interactive terminal game
fn run_play(config: Option<std::path::PathBuf>, reversed: bool) -> Result<()> {
    let config = UiConfig::resolve(config.as_deref())?;
    let config = if reversed {
        config.with_reverse_moves(true)
    } else {
        config
    };
    tui::run_tui(config)
}

/// Replay moves and print the resulting state
#[instrument]
fn run_replay(cells: &[usize], jump: Option<usize>, reversed: bool, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut state = cells.iter().try_fold(GameState::new(), |state, cell| {
        state
            .apply_index(*cell)
            .with_context(|| format!("applying cell {}", cell))
    })?;
    info!(history_len = state.history().len(), "Replayed moves");

    if let Some(step) = jump {
        state = state.jump_to(step).context("jumping")?;
    }
    if reversed {
        state = state.toggle_move_order();
    }

    let summary = GameSummary::from(&state);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary);
    }
    Ok(())
}
