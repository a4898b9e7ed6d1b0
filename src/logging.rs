//! Logging initialization.
//!
//! The TUI owns the terminal, so by default logs go to
//! `<data_dir>/logs/stepform-{datetime}.log`. With file logging disabled they
//! go to stderr.

use crate::config::FormConfig;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Result of logging initialization
pub struct LoggingHandle {
    /// Keeps the background writer alive; dropping it flushes buffered logs.
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file, when logging to a file
    pub log_file_path: Option<PathBuf>,
}

/// Log file name for a given UTC time
pub fn log_file_name(now: chrono::DateTime<chrono::Utc>) -> String {
    format!("stepform-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// Pick the filter directive: RUST_LOG, then `--debug`, then config
fn filter_directive(config: &FormConfig, debug_override: bool) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if debug_override {
            "stepform_tui=debug".to_string()
        } else {
            config.log_level().to_string()
        }
    })
}

/// Initialize the global tracing subscriber.
///
/// The returned handle must be kept alive for the duration of the program.
pub fn init_logging(
    config: &FormConfig,
    logs_dir: &Path,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let filter = tracing_subscriber::EnvFilter::new(filter_directive(config, debug_override));

    if config.log_to_file() {
        std::fs::create_dir_all(logs_dir)?;

        let log_filename = log_file_name(chrono::Utc::now());
        let log_file_path = logs_dir.join(&log_filename);

        let file_appender = tracing_appender::rolling::never(logs_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}
