//! Polling worker and client-facing handle.
//!
//! The worker owns the HTTP client and the tick loop; each tick spawns
//! an independent fetch so a slow response never delays the cadence.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::config::PollerConfig;
use crate::error::Result;
use crate::event::TelemetryEvent;
use crate::wire::StatusResponse;

/// Background snapshot poller.
///
/// Design: the poller owns the worker task; [`PollerHandle`] provides a
/// cloneable façade for subscribers.
pub struct Poller {
    handle: PollerHandle,
    worker_handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn the polling worker with the given configuration.
    pub fn spawn(config: PollerConfig) -> Self {
        let (event_tx, _) = broadcast::channel(config.event_buffer_size);
        let handle = PollerHandle { event_tx };

        let worker = Worker {
            config,
            http_client: reqwest::Client::new(),
            event_tx: handle.event_tx.clone(),
        };
        let worker_handle = tokio::spawn(worker.run());

        Self {
            handle,
            worker_handle,
        }
    }

    /// Get a cloneable handle to this poller.
    pub fn handle(&self) -> PollerHandle {
        self.handle.clone()
    }

    /// Subscribe to telemetry events.
    pub fn subscribe(&self) -> broadcast::Receiver<TelemetryEvent> {
        self.handle.subscribe()
    }

    /// Stop the worker and wait for it to wind down.
    pub async fn shutdown(self) -> Result<()> {
        self.worker_handle.abort();
        match self.worker_handle.await {
            Ok(()) => Ok(()),
            Err(err) if err.is_cancelled() => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Client-facing handle to the poller's event stream.
#[derive(Clone)]
pub struct PollerHandle {
    event_tx: broadcast::Sender<TelemetryEvent>,
}

impl PollerHandle {
    /// Subscribe to telemetry events.
    pub fn subscribe(&self) -> broadcast::Receiver<TelemetryEvent> {
        self.event_tx.subscribe()
    }
}

struct Worker {
    config: PollerConfig,
    http_client: reqwest::Client,
    event_tx: broadcast::Sender<TelemetryEvent>,
}

impl Worker {
    async fn run(self) {
        tracing::info!(
            endpoint = %self.config.endpoint,
            interval_ms = self.config.interval.as_millis() as u64,
            "poller worker started"
        );

        let mut ticker = time::interval(self.config.interval);
        // A stalled fetch must not cause a burst of catch-up ticks.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let client = self.http_client.clone();
            let endpoint = self.config.endpoint.clone();
            let event_tx = self.event_tx.clone();

            // Fire-and-forget: overlap is permitted, last completed
            // response wins.
            tokio::spawn(async move {
                let event = fetch_once(&client, &endpoint).await;
                // Send fails only when nobody is subscribed yet.
                let _ = event_tx.send(event);
            });
        }
    }
}

/// Perform one request and classify the outcome.
///
/// Every transport or parse failure collapses to the generic
/// "Connection error" reason; the specific cause is logged only.
async fn fetch_once(client: &reqwest::Client, endpoint: &str) -> TelemetryEvent {
    let response = match client.get(endpoint).send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!(%err, "snapshot request failed");
            return TelemetryEvent::disconnected(TelemetryEvent::CONNECTION_ERROR);
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%status, "relay returned non-success status");
        return TelemetryEvent::disconnected(TelemetryEvent::CONNECTION_ERROR);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(%err, "failed to read relay response body");
            return TelemetryEvent::disconnected(TelemetryEvent::CONNECTION_ERROR);
        }
    };

    match serde_json::from_str::<StatusResponse>(&body) {
        Ok(envelope) => envelope.into_event(),
        Err(err) => {
            tracing::debug!(%err, "malformed relay response");
            TelemetryEvent::disconnected(TelemetryEvent::CONNECTION_ERROR)
        }
    }
}
