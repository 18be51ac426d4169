//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use poller::PollerHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the poller via [`PollerHandle`]: they
/// subscribe to telemetry events and render the derived display set.
/// Frontends do NOT own the poller - they receive a handle only.
///
/// # Implementations
///
/// - `CliFrontend`: terminal dashboard (ratatui + crossterm)
/// - Future: `GuiFrontend`, `WebFrontend`, etc.
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// Blocks until the user quits or the event stream closes.
    async fn run(&mut self, handle: PollerHandle) -> Result<()>;
}
