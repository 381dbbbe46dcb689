//! Process-wide logging setup for the simulator binary.
//!
//! Records always go to the configured log file; stderr is added when
//! console logging is enabled, leaving stdout for program output.
//! `RUST_LOG`, when set, takes precedence over the configured level.
//! Colour is used only when stderr is a terminal. The gear core never
//! calls into this module; it only sees an `EventSink`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogOptions {
    pub file: PathBuf,
    pub level: String,
    pub console: bool,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unknown log level '{0}'")]
    UnknownLevel(String),

    #[error("failed to create log directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to open log file {}: {source}", .path.display())]
    OpenFile { path: PathBuf, source: io::Error },

    #[error("a global logger is already installed: {0}")]
    Init(#[from] TryInitError),
}

/// Parse a level name, case-insensitively.
///
/// Accepts the usual `tracing` names plus `warning` and `critical`.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "info" => Some(LevelFilter::INFO),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "error" | "critical" => Some(LevelFilter::ERROR),
        _ => None,
    }
}

/// Open `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LoggingError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer when dropped; hold it
/// for the life of the process.
pub fn init_logging(options: &LogOptions) -> Result<WorkerGuard, LoggingError> {
    let level =
        parse_level(&options.level).ok_or_else(|| LoggingError::UnknownLevel(options.level.clone()))?;

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let file = open_log_file(&options.file)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let console_layer = options.console.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .with_target(true)
            .with_thread_ids(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    Ok(guard)
}
