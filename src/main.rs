//! applyform - Terminal Job Application Form
//!
//! Fill in a job application in the terminal. Fields are validated on
//! submit, progress is shown as you type, and a completed application is
//! handed to a simulated submission service.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};

use applyform::application::App;
use applyform::infrastructure::{init_file_logging, load_settings};
use applyform::presentation::{render_ui, InputHandler};

/// How often the loop wakes without input, so submissions and toasts advance.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Entry point for the applyform terminal application.
///
/// Loads settings, optionally starts file logging, sets up the terminal and
/// runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the log file cannot be
/// opened, or terminal setup fails.
fn main() -> anyhow::Result<()> {
    let settings = load_settings().context("invalid configuration")?;
    if let Some(path) = &settings.log_file {
        init_file_logging(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
    }
    info!(?settings, "starting applyform");

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&settings);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Renders, waits up to [`TICK_RATE`] for a key, then advances the clock.
/// Continues running until the user presses Ctrl+Q or Ctrl+C.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Char('c')
                            if key.modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            info!("quit requested");
                            return Ok(());
                        }
                        _ => InputHandler::handle_key_event(app, key.code, key.modifiers, Instant::now()),
                    }
                }
            }
        }

        app.tick(Instant::now());
    }
}
