//! Terminal UI: home, game and credits screens.

mod board;
mod controller;
mod input;
mod screen;
mod screens;

pub use board::strike;
pub use controller::AppController;
pub use input::move_cursor;
pub use screen::{Screen, ScreenTransition};
pub use screens::{CreditsScreen, GameScreen, HomeScreen, SetupDialog};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::{AppConfig, Roster};

/// Runs the terminal UI until the user quits.
///
/// Expects tracing to write somewhere other than stdout. The credits screen
/// fetches on the ambient tokio runtime; without one it stays loading.
#[instrument(skip(config))]
pub fn run_tui(config: AppConfig, roster: Option<Roster>) -> Result<()> {
    info!("Starting tictac TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = AppController::new(config).run(&mut terminal, roster);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }

    res
}
