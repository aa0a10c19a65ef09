//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, HitMap, action_for_key, action_for_mouse};

use crate::config::UiConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
pub fn run_tui(config: UiConfig) -> Result<()> {
    init_file_tracing(&config)?;
    info!("Starting tic-tac-toe TUI");

    let res = {
        let mut guard = TerminalGuard::new(io::stdout());
        guard.enter().and_then(|()| {
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            run_app(&mut terminal, App::new(&config))
        })
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Puts the terminal back into cooked mode on the main screen when dropped.
struct TerminalGuard<W: Write> {
    out: W,
    raw: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self { out, raw: false }
    }

    fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        self.raw = true;
        execute!(self.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.raw
            && let Err(err) = disable_raw_mode()
        {
            error!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show) {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Writes logs to the configured file so they never reach the screen.
fn init_file_tracing(config: &UiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("creating log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        let mut hit_map = HitMap::default();
        terminal.draw(|f| hit_map = ui::draw(f, &app))?;
        app.set_hit_map(hit_map);

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => action_for_key(key),
            Event::Mouse(mouse) => action_for_mouse(mouse, app.hit_map()),
            _ => None,
        };

        if let Some(action) = action {
            app.handle(action);
        }
        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
