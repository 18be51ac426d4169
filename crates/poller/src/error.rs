//! Poller errors.
//!
//! Transport and parse failures are not errors at this layer: they
//! degrade to [`TelemetryEvent::Disconnected`](crate::TelemetryEvent)
//! and the poller keeps running. Only lifecycle faults surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PollerError {
    /// The background worker panicked or was torn down unexpectedly.
    #[error("poller worker failed to join: {0}")]
    WorkerJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PollerError>;
