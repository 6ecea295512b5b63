//! Tracing subscriber setup for the binary.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

/// Local-time timestamps in the `YYYY-MM-DD-T HH:MM:SS` shape used in log files.
struct KhetiTimer;

impl tracing_subscriber::fmt::time::FormatTime for KhetiTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let now = chrono::Local::now();
        write!(w, "{}", now.format("%Y-%m-%d-T %H:%M:%S"))
    }
}

/// Keeps the non-blocking writer alive for the life of the process.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the level filter.
///
/// Details:
/// - `RUST_LOG` wins when set and valid; otherwise `level` is used
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `logs_dir`: Directory for `kheti-guru.log`
/// - `level`: Default level when `RUST_LOG` is unset
///
/// Details:
/// - Appends to `<logs_dir>/kheti-guru.log` through a non-blocking writer
/// - Falls back to stderr if the file cannot be opened
pub fn init(logs_dir: &Path, level: &str) {
    let log_path = logs_dir.join("kheti-guru.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(KhetiTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::debug!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(KhetiTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}
