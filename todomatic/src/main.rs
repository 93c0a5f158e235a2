//! `TodoMatic` — terminal task list backed by a remote REST API.
//!
//! On startup the app fetches `/todos` and `/users` concurrently from the
//! configured API, then runs a TUI over the in-memory list. All edits are
//! local; nothing is written back. Configuration via CLI flags,
//! environment variables, or config file
//! (`~/.config/todomatic/config.toml`).
//!
//! ```bash
//! # Against the public fixture API
//! cargo run --bin todomatic
//!
//! # Against a local server
//! cargo run --bin todomatic -- --base-url http://127.0.0.1:3000
//!
//! # Or via environment variable
//! TODOMATIC_API_URL=http://127.0.0.1:3000 cargo run
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;

use todomatic::app::{App, Phase};
use todomatic::config::{CliArgs, ClientConfig};
use todomatic::net::{self, FetchCommand, FetchEvent};
use todomatic::ui;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > env > defaults).
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            ClientConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!(base_url = %config.base_url, "todomatic starting");

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, &config).await;

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("todomatic exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the
/// terminal). Returns a [`WorkerGuard`] that must be held until shutdown
/// to ensure all buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("todomatic.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &ClientConfig,
) -> io::Result<()> {
    let mut app = App::new(config.max_task_title_len);

    // Spawn the background loader; the initial fetch starts immediately.
    let (cmd_tx, mut evt_rx) = match net::spawn_fetch(&config.to_fetch_config()) {
        Ok((tx, rx)) => (Some(tx), Some(rx)),
        Err(e) => {
            app.phase = Phase::Failed(e.to_string());
            (None, None)
        }
    };

    loop {
        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Step 2: Drain all pending FetchEvents (non-blocking).
        if let Some(ref mut rx) = evt_rx {
            drain_fetch_events(&mut app, rx);
        }

        // Step 3: Poll for terminal input events.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // handle_key_event returns Some(FetchCommand) when the action
            // needs the background loader (refresh / retry).
            if let Some(fetch_cmd) = app.handle_key_event(key)
                && let Some(ref tx) = cmd_tx
            {
                match tx.try_send(fetch_cmd) {
                    Ok(()) => {}
                    Err(mpsc::error::TrySendError::Full(_)) => {
                        app.notice = Some("Refresh already queued".to_string());
                    }
                    Err(mpsc::error::TrySendError::Closed(_)) => {
                        app.notice = Some("Loader stopped".to_string());
                    }
                }
            }
        }

        if app.should_quit {
            // Send shutdown command to the background loader.
            if let Some(ref tx) = cmd_tx {
                let _ = tx.try_send(FetchCommand::Shutdown);
            }
            return Ok(());
        }
    }
}

/// Drain all pending `FetchEvent`s from the receiver and apply them.
fn drain_fetch_events(app: &mut App, rx: &mut mpsc::Receiver<FetchEvent>) {
    while let Ok(event) = rx.try_recv() {
        app.apply_fetch_event(event);
    }
}
