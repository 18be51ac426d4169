//! Top-level client orchestrating the Poller and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Poller (snapshot fetching and event broadcast)
//!   └─→ Frontend (UI layer - CLI, future GUI)
//! ```
//!
//! # Separation of Concerns
//!
//! - **Client**: composition root, lifecycle management
//! - **Poller**: transport only; emits telemetry events
//! - **Frontend**: event consumption and rendering (via PollerHandle only)
//!
//! All layers are built independently and injected via the builder, so
//! a mock frontend or a recorded event stream can stand in for testing.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use poller::Poller;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` constructs layers independently
/// 2. `Client::run()` hands the poller handle to the frontend
/// 3. The frontend blocks until the user quits
/// 4. On exit the poller worker is shut down
pub struct Client {
    poller: Poller,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend exits.
    pub async fn run(mut self) -> Result<()> {
        let handle = self.poller.handle();

        let frontend_result = self.frontend.run(handle).await;

        if let Err(err) = self.poller.shutdown().await {
            tracing::warn!("Poller shutdown reported an error: {err}");
        }

        frontend_result
    }
}
