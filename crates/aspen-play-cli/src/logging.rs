//! File-based logging setup.
//!
//! The TUI owns the terminal, so log output goes to a file under the
//! playground home instead of stderr. Logging is off unless ASPEN_PLAY_LOG
//! is set to a tracing filter (e.g. `debug` or `aspen_play_core=trace`).

use anyhow::{Context, Result};
use aspen_play_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "ASPEN_PLAY_LOG";

/// Initializes file logging if [`LOG_ENV_VAR`] is set.
///
/// Returns a guard that must stay alive for the process lifetime; dropping
/// it flushes the non-blocking writer.
pub fn init() -> Result<Option<WorkerGuard>> {
    let Ok(filter) = std::env::var(LOG_ENV_VAR) else {
        return Ok(None);
    };
    if filter.trim().is_empty() {
        return Ok(None);
    }

    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "aspen-play.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
