//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global subscriber from the log section
//! - Route output to stdout and, optionally, a log file
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for log shippers, text format otherwise
//! - `RUST_LOG` overrides `LOG_LEVEL` when set
//! - File output goes through a non-blocking writer; keep the guard alive

use std::fmt;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, LogConfig};

/// Output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; everything else is text.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Map a level name to a filter. Unknown names fall back to `info`.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" | "warning" => LevelFilter::WARN,
        "error" | "fatal" | "panic" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

/// Keeps the file writer flushing. Drop it only at process exit.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

impl fmt::Debug for LogGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogGuard")
            .field("file", &self._file.is_some())
            .finish()
    }
}

/// Install the global subscriber described by `config`.
pub fn init(config: &LogConfig) -> Result<LogGuard, ConfigError> {
    let filter = EnvFilter::builder()
        .with_default_directive(parse_level(&config.level).into())
        .from_env_lossy();
    let format = LogFormat::from_name(&config.format);

    if !config.enable_file {
        install(format, std::io::stdout, filter)?;
        return Ok(LogGuard { _file: None });
    }

    let (file_writer, guard) = open_log_file(Path::new(&config.file_path))?;
    install(format, std::io::stdout.and(file_writer), filter)?;
    tracing::debug!(path = %config.file_path, "File logging enabled");
    Ok(LogGuard { _file: Some(guard) })
}

/// Open `path` for appending, creating parent directories as needed.
fn open_log_file(path: &Path) -> Result<(NonBlocking, WorkerGuard), ConfigError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ConfigError::Logging(format!("invalid log file path: {}", path.display())))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    Ok(tracing_appender::non_blocking(appender))
}

fn install<W>(format: LogFormat, writer: W, filter: EnvFilter) -> Result<(), ConfigError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let result = match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_writer(writer)
            .with_env_filter(filter)
            .try_init(),
    };
    result.map_err(|e| ConfigError::Logging(e.to_string()))
}
