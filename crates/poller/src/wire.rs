//! Wire envelope returned by the relay endpoint.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::Deserialize;

use gsi_core::Snapshot;

use crate::event::TelemetryEvent;

/// Response envelope: `{ "status": "waiting" | "active", "message"?,
/// "data"?, "last_update"? }`.
#[derive(Clone, Debug, Deserialize)]
pub struct StatusResponse {
    pub status: GameStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Snapshot>,
    /// ISO-8601 timestamp of the last upstream update.
    #[serde(default)]
    pub last_update: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// No game running; `message` explains why.
    Waiting,
    /// A game is live; `data` must be present.
    Active,
}

impl StatusResponse {
    /// Classify the envelope into a telemetry event.
    ///
    /// "waiting" carries the server-supplied message through verbatim;
    /// "active" without a payload is treated as a disconnect because
    /// the contract makes `data` mandatory for active games.
    pub fn into_event(self) -> TelemetryEvent {
        match (self.status, self.data) {
            (GameStatus::Active, Some(snapshot)) => TelemetryEvent::Connected {
                snapshot,
                last_update: self.last_update.as_deref().and_then(parse_timestamp),
            },
            (GameStatus::Active, None) => {
                tracing::warn!("relay reported active status without a data payload");
                TelemetryEvent::disconnected(TelemetryEvent::CONNECTION_ERROR)
            }
            (GameStatus::Waiting, _) => TelemetryEvent::disconnected(
                self.message
                    .unwrap_or_else(|| "Waiting for game".to_string()),
            ),
        }
    }
}

/// Parse the relay's ISO-8601 timestamp into local time.
///
/// The reference backend emits naive local timestamps
/// (`2024-01-01T12:30:05.123456`); offset-carrying variants are
/// accepted too.
fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    Local.from_local_datetime(&naive).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn waiting_envelope_becomes_disconnect_with_message() {
        let body = r#"{"status": "waiting", "message": "No game detected"}"#;
        let response: StatusResponse = serde_json::from_str(body).unwrap();

        assert_eq!(
            response.into_event(),
            TelemetryEvent::disconnected("No game detected")
        );
    }

    #[test]
    fn active_envelope_carries_the_snapshot() {
        let body = r#"{
            "status": "active",
            "last_update": "2024-01-01T12:30:05.123456",
            "data": { "hero": { "name": "npc_dota_hero_pudge" } }
        }"#;
        let response: StatusResponse = serde_json::from_str(body).unwrap();

        match response.into_event() {
            TelemetryEvent::Connected {
                snapshot,
                last_update,
            } => {
                assert_eq!(snapshot.hero.name, "npc_dota_hero_pudge");
                let stamp = last_update.expect("timestamp should parse");
                assert_eq!(stamp.hour(), 12);
                assert_eq!(stamp.minute(), 30);
            }
            other => panic!("expected Connected, got {other:?}"),
        }
    }

    #[test]
    fn active_without_data_is_a_disconnect() {
        let body = r#"{"status": "active"}"#;
        let response: StatusResponse = serde_json::from_str(body).unwrap();

        assert_eq!(
            response.into_event(),
            TelemetryEvent::disconnected(TelemetryEvent::CONNECTION_ERROR)
        );
    }

    #[test]
    fn unknown_status_fails_to_decode() {
        let body = r#"{"status": "rebooting"}"#;
        assert!(serde_json::from_str::<StatusResponse>(body).is_err());
    }

    #[test]
    fn offset_timestamps_accepted() {
        assert!(parse_timestamp("2024-01-01T12:30:05+02:00").is_some());
    }
}
