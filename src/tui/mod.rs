//! Terminal UI for time-travel tic-tac-toe.

mod app;
pub mod input;
mod ui;

pub use app::App;

use crate::settings::Settings;
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Runs the interactive game until the player quits.
pub fn run_tui(settings: &Settings) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut guard = TerminalGuard::new();
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*settings.show_coordinates());
    let tick = Duration::from_millis(*settings.tick_rate_ms());
    let res = run_app(&mut terminal, app, tick);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    first_error(res, guard.restore())
}

/// Puts the terminal back into cooked mode on every exit path.
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { restored: false }
    }

    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        )?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = ?err, "Failed to restore terminal");
        }
    }
}

/// Loop errors win over teardown errors.
fn first_error(loop_result: Result<()>, restore: Result<()>) -> Result<()> {
    match (loop_result, restore) {
        (Err(err), Err(restore_err)) => {
            warn!(error = ?restore_err, "Failed to restore terminal");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restore) => restore,
    }
}

#[instrument(skip_all, fields(tick_ms = tick.as_millis() as u64))]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick: Duration,
) -> Result<()> {
    while !app.should_quit() {
        if app.take_redraw() {
            terminal.draw(|f| ui::draw(f, &app))?;
        }

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(command) = input::command_for(key.code) {
                    app.handle(command);
                }
            }
            Event::Resize(_, _) => app.request_redraw(),
            _ => {}
        }
    }
    Ok(())
}
