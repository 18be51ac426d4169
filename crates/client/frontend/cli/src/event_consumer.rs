//! Maintains the CLI message log in response to telemetry events.
//!
//! Snapshots arrive many times a second; logging every frame would
//! drown the panel, so only connection-state transitions produce
//! entries.

use client_frontend_core::{EventConsumer, EventImpact, MessageEntry, MessageLevel, MessageLog};
use poller::TelemetryEvent;

pub struct CliEventConsumer {
    log: MessageLog,
    /// Status of the previous event, used to detect transitions.
    /// `None` until the first event arrives.
    last_status: Option<ConnectionStatus>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ConnectionStatus {
    Connected,
    Disconnected(String),
}

impl CliEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self {
            log,
            last_status: None,
        }
    }

    fn status_of(event: &TelemetryEvent) -> ConnectionStatus {
        match event {
            TelemetryEvent::Connected { .. } => ConnectionStatus::Connected,
            TelemetryEvent::Disconnected { reason } => {
                ConnectionStatus::Disconnected(reason.clone())
            }
        }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &TelemetryEvent) -> EventImpact {
        let status = Self::status_of(event);

        if self.last_status.as_ref() != Some(&status) {
            let entry = match &status {
                ConnectionStatus::Connected => {
                    MessageEntry::now("Connected to game", MessageLevel::Info)
                }
                ConnectionStatus::Disconnected(reason) => {
                    MessageEntry::now(reason.clone(), MessageLevel::Warning)
                }
            };
            self.log.push(entry);
            self.last_status = Some(status);
        }

        // Live values change every frame even without a transition.
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsi_core::Snapshot;

    fn connected() -> TelemetryEvent {
        TelemetryEvent::Connected {
            snapshot: Snapshot::default(),
            last_update: None,
        }
    }

    #[test]
    fn logs_transitions_not_frames() {
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));

        consumer.on_event(&connected());
        consumer.on_event(&connected());
        consumer.on_event(&connected());

        assert_eq!(consumer.message_log().iter().count(), 1);
    }

    #[test]
    fn disconnect_reason_changes_count_as_transitions() {
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));

        consumer.on_event(&TelemetryEvent::disconnected("No game detected"));
        consumer.on_event(&TelemetryEvent::disconnected("No game detected"));
        consumer.on_event(&TelemetryEvent::disconnected("Connection error"));
        consumer.on_event(&connected());

        let texts: Vec<_> = consumer
            .message_log()
            .iter()
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(
            texts,
            ["No game detected", "Connection error", "Connected to game"]
        );
    }

    #[test]
    fn every_event_requests_a_redraw() {
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));
        assert!(consumer.on_event(&connected()).requires_redraw);
        assert!(consumer.on_event(&connected()).requires_redraw);
    }
}
