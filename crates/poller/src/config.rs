//! Poller configuration.

use std::env;
use std::time::Duration;

/// Default relay endpoint exposed by the local backend.
const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/gamestate";

/// Default polling cadence. The endpoint is local and low-latency, so
/// the cadence is intentionally aggressive and fixed: no backoff, no
/// adaptive throttling.
const DEFAULT_INTERVAL_MS: u64 = 100;

/// Configuration shared by the poller worker and its handle.
#[derive(Clone, Debug)]
pub struct PollerConfig {
    /// URL polled for snapshots.
    pub endpoint: String,
    /// Fixed interval between poll ticks.
    pub interval: Duration,
    /// Broadcast channel capacity for telemetry events.
    pub event_buffer_size: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            event_buffer_size: 16,
        }
    }
}

impl PollerConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GSI_ENDPOINT` - Relay URL (default: http://localhost:3000/api/gamestate)
    /// - `GSI_POLL_INTERVAL_MS` - Poll cadence in milliseconds (default: 100)
    /// - `GSI_EVENT_BUFFER` - Event channel capacity (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = env::var("GSI_ENDPOINT") {
            if !endpoint.is_empty() {
                config.endpoint = endpoint;
            }
        }
        if let Some(ms) = read_env::<u64>("GSI_POLL_INTERVAL_MS") {
            config.interval = Duration::from_millis(ms.max(10));
        }
        if let Some(capacity) = read_env::<usize>("GSI_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
