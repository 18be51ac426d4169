//! Events emitted by the poller on each completed fetch.

use chrono::{DateTime, Local};
use gsi_core::Snapshot;

/// Outcome of one polling cycle.
#[derive(Clone, Debug, PartialEq)]
pub enum TelemetryEvent {
    /// The relay reported an active game with a snapshot payload.
    Connected {
        snapshot: Snapshot,
        /// Server-reported time of the last upstream update, if it
        /// could be parsed.
        last_update: Option<DateTime<Local>>,
    },
    /// No usable snapshot this cycle: transport failure, malformed
    /// body, or the relay waiting for a game.
    Disconnected { reason: String },
}

impl TelemetryEvent {
    /// Generic reason used for every transport or parse failure. The
    /// underlying cause goes to the log, not the dashboard.
    pub const CONNECTION_ERROR: &'static str = "Connection error";

    pub fn disconnected(reason: impl Into<String>) -> Self {
        Self::Disconnected {
            reason: reason.into(),
        }
    }
}
