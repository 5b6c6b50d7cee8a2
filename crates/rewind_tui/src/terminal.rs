//! Terminal lifecycle and the interactive loop.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::app::App;
use crate::config::TuiConfig;
use crate::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
///
/// Once raw mode is on, the terminal is restored on every exit path,
/// including a failed setup or a failed game loop.
#[instrument(skip(config))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Rewind TUI");

    enable_raw_mode()?;
    let res = enter_and_run(config);
    let restored = restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        error!(error = %err, "Failed to restore terminal");
    }
    res.and(restored.map_err(anyhow::Error::from))
}

fn enter_and_run(config: &TuiConfig) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let app = App::new(config);
    run_app(&mut terminal, app, Duration::from_millis(*config.tick_ms()))
}

fn restore() -> io::Result<()> {
    restore_with(&mut io::stdout(), disable_raw_mode)
}

/// Runs every teardown step and returns the first error.
fn restore_with(out: &mut impl Write, disable: impl FnOnce() -> io::Result<()>) -> io::Result<()> {
    let raw = disable();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)
}

fn run_app(terminal: &mut Tui, mut app: App, tick: Duration) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if *app.should_quit() {
            info!(steps = app.game().history().len(), "Leaving game loop");
            return Ok(());
        }
    }
}
