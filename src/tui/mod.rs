//! Terminal UI host.
//!
//! Owns the one [`GameState`](crate::GameState) of the session through
//! [`App`], turns key presses into game actions, and redraws after each.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::config::AppConfig;

pub use app::{App, Control, Focus};
pub use ui::draw;

/// Runs the terminal UI until the user quits.
///
/// The caller installs logging first, writing to a file so it does not
/// interfere with the screen.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!(history_order = %config.history_order(), "Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let res = run_session(config);
    let restored = restore_terminal(&mut io::stdout()).context("Failed to restore terminal");

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res.and(restored)
}

/// Enters the alternate screen and runs the game. Raw mode is already on.
fn run_session(config: &AppConfig) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run_app(&mut terminal, App::new(*config.history_order()))
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even if an earlier one fails; the first error wins.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Event loop: draw, wait for a key, apply it.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // crossterm reports both press and release on some platforms.
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == Control::Quit {
                info!(steps = app.state().history().len(), "Leaving game");
                return Ok(());
            }
        }
    }
}
