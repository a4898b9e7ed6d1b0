//! Stepform TUI - a three-step form in the terminal
//!
//! Collects personal and address details across three steps, validates
//! them as they are typed, and autosaves progress to a local storage slot
//! until the form is submitted.

mod app;
mod config;
mod logging;
mod platform;
mod state;
mod storage;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::FormConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use storage::{FormStore, LocalFormStore, LocalStorage};

#[derive(Parser)]
#[command(name = "stepform")]
#[command(about = "Fill in a three-step form with autosaved progress")]
#[command(version)]
pub struct Cli {
    /// Directory holding the storage slots
    #[arg(short, long)]
    storage_dir: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Discard saved progress before starting
    #[arg(long)]
    reset: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => FormConfig::load_from(path)?,
        None => FormConfig::load()?,
    };
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = Some(dir);
    }

    let logging_handle = logging::init_logging(&config, &config.logs_dir(), cli.debug)
        .context("failed to initialize logging")?;
    if let Some(path) = &logging_handle.log_file_path {
        tracing::info!("logging to {}", path.display());
    }

    let store = LocalFormStore::new(
        LocalStorage::new(config.storage_dir()),
        config.storage_key(),
    );
    tracing::debug!(
        dir = %store.storage().dir().display(),
        key = store.key(),
        "using form storage"
    );
    if cli.reset {
        tracing::info!(key = store.key(), "discarding saved progress");
        store.clear();
    }
    let storage_label = match store.storage().slot_path(store.key()) {
        Ok(path) => path.display().to_string(),
        Err(_) => store.key().to_string(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(Box::new(store), storage_label);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("terminal loop failed: {err:?}");
        eprintln!("Error: {err:?}");
        // Flush the non-blocking log writer before exiting
        drop(logging_handle);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
