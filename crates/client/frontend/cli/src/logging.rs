//! File-based logging setup for the terminal client.
//!
//! The terminal owns stdout, so diagnostics go to a log file instead.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with a non-blocking file writer.
///
/// Returns a guard that must be kept alive for the duration of the
/// process; dropping it flushes and stops the writer.
pub fn setup_logging(log_dir: &str) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(log_dir, "dotahud.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
