//! Snapshot poller: fetches telemetry from the relay endpoint on a
//! fixed cadence and broadcasts the result to subscribers.
//!
//! The poller owns a background tokio worker; clients interact through
//! a cloneable [`PollerHandle`] and a broadcast channel of
//! [`TelemetryEvent`]s.
//!
//! Overlap policy: ticks never wait for the previous request, so under
//! a slow network several fetches may be in flight and complete out of
//! order. Subscribers always reflect the most recently *completed*
//! response; losing one stale frame of a live dashboard is harmless, so
//! no sequencing guard exists.

mod config;
mod error;
mod event;
mod poller;
mod wire;

pub use config::PollerConfig;
pub use error::{PollerError, Result};
pub use event::TelemetryEvent;
pub use poller::{Poller, PollerHandle};
pub use wire::{GameStatus, StatusResponse};
