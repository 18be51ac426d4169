//! Telemetry HUD client binary.
//!
//! Composition root assembling the snapshot poller and the terminal
//! frontend. Configuration comes from the environment (optionally via
//! a `.env` file):
//!
//! ```bash
//! GSI_ENDPOINT=http://localhost:3000/api/gamestate cargo run -p dotahud-client
//! ```

use anyhow::Result;

use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
use dotahud_client::Client;
use poller::{Poller, PollerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let poller_config = PollerConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (file-based; the terminal owns stdout)
    let _log_guard = logging::setup_logging("logs")?;

    tracing::info!("Starting telemetry HUD");
    tracing::info!("Endpoint: {}", poller_config.endpoint);
    tracing::info!("Poll interval: {:?}", poller_config.interval);

    // 3. Build Poller (independent layer)
    let poller = Poller::spawn(poller_config);

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Compose and run
    let client = Client::builder().poller(poller).frontend(frontend).build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
