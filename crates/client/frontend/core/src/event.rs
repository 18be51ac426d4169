//! Event consumption seam between the poller stream and a frontend.

use poller::TelemetryEvent;

use crate::message::MessageLog;

/// How an event affects the UI.
#[derive(Clone, Copy, Debug, Default)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }
}

/// Consumes telemetry events, maintaining whatever bookkeeping the
/// frontend needs (message log, connection state) and reporting whether
/// a redraw is warranted.
pub trait EventConsumer {
    fn on_event(&mut self, event: &TelemetryEvent) -> EventImpact;

    fn message_log(&self) -> &MessageLog;

    fn message_log_mut(&mut self) -> &mut MessageLog;
}
