//! Sensei TUI binary.
//!
//! ## Usage
//!
//! ```bash
//! # Gateway on localhost:8000 (default)
//! sensei-tui
//!
//! # Open a file and talk to a remote gateway
//! sensei-tui --file hello.cpp \
//!     --server-url http://sensei.example.com:8000 \
//!     --ws-url ws://sensei.example.com:8000/ws/run
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use sensei_tui::api::{HttpExplainClient, WsConnector};
use sensei_tui::domain::{
    config_dir, FileStore, MemoryStore, SettingsError, SettingsStore, SAVE_FILE_NAME,
};
use sensei_tui::{ui, App, AppEvents, AppOptions};

/// Sensei terminal front end
#[derive(Parser, Debug)]
#[command(name = "sensei-tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Gateway HTTP base URL
    #[arg(long, default_value = "http://localhost:8000")]
    server_url: String,

    /// Run stream WebSocket URL
    #[arg(long, default_value = "ws://localhost:8000/ws/run")]
    ws_url: String,

    /// C++ file to open instead of the sample program
    #[arg(long)]
    file: Option<PathBuf>,

    /// Settings file (default: <config dir>/sensei/settings.json)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log file (default: <config dir>/sensei/sensei-tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.clone())?;

    let initial_source = match &args.file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        None => None,
    };

    let settings: Box<dyn SettingsStore> = match args.settings.clone() {
        Some(path) => Box::new(FileStore::new(path)),
        None => match FileStore::default_path() {
            Ok(path) => Box::new(FileStore::new(path)),
            Err(e) => {
                tracing::warn!(error = %e, "Settings will not persist");
                Box::new(MemoryStore::new())
            }
        },
    };

    let explainer = HttpExplainClient::new(&args.server_url).context("Failed to build HTTP client")?;
    tracing::info!(server = %args.server_url, ws = %args.ws_url, "Starting sensei-tui");

    let (mut app, events) = App::new(AppOptions {
        explainer: Arc::new(explainer),
        connector: Box::new(WsConnector::new()),
        ws_url: args.ws_url,
        settings,
        save_path: PathBuf::from(SAVE_FILE_NAME),
        initial_source,
    });

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, events).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "sensei-tui exited with error");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

const LOG_FILE_NAME: &str = "sensei-tui.log";

/// Explicit path, else the config directory, else the current directory.
fn log_path(explicit: Option<PathBuf>, config: Result<PathBuf, SettingsError>) -> PathBuf {
    match (explicit, config) {
        (Some(path), _) => path,
        (None, Ok(dir)) => dir.join(LOG_FILE_NAME),
        (None, Err(_)) => PathBuf::from(LOG_FILE_NAME),
    }
}

/// Log to a file so the alternate screen stays clean.
fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let path = log_path(path, config_dir());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    Ok(())
}

/// Main application loop.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut events: AppEvents,
) -> Result<()> {
    let poll_timeout = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        events.drain(app);
        app.tick(Instant::now());

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
