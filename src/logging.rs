//! Logging setup for the CLI
//!
//! Logs go to a file in the data directory so stdout only carries the report.
//! When that file cannot be opened, warnings go to stderr instead and the run
//! carries on.

use std::path::Path;

use thiserror::Error;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "PG_VERSION_REPORT_LOG";

const DEFAULT_FILTER: &str = "info";

const DEFAULT_LOG_FILE: &str = "pg-version-report.log";

#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub json: bool,
    /// Also write human-readable logs to stderr
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum LogFileError {
    #[error("Failed to create log directory: {0}")]
    Directory(#[from] std::io::Error),

    #[error("Failed to open log file: {0}")]
    Appender(#[from] InitError),
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered lines are flushed; it is `None` when logging fell back to stderr.
pub fn init(log_file: &Path, options: LogOptions) -> Option<WorkerGuard> {
    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref());

    let (writer, guard, open_error) = match file_appender(log_file) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    let file_layer = writer.map(|writer| {
        if options.json {
            fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .boxed()
        } else {
            fmt::layer().with_writer(writer).with_ansi(false).boxed()
        }
    });

    let stderr_layer = if options.verbose {
        Some(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact()
                .boxed(),
        )
    } else if open_error.is_some() {
        Some(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact()
                .with_filter(LevelFilter::WARN)
                .boxed(),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    if let Some(e) = open_error {
        warn!(
            "Logging to stderr, cannot use {}: {}",
            log_file.display(),
            e
        );
    }

    guard
}

/// Never-rotating appender for `log_file`, creating its directory first.
fn file_appender(log_file: &Path) -> Result<RollingFileAppender, LogFileError> {
    let directory = log_file.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;
    let file_name = log_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)?;
    Ok(appender)
}

fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
