//! Glue code tying the poller handle and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{Frontend, FrontendConfig, MessageLog};
use poller::PollerHandle;

use crate::config::CliConfig;
use crate::event_consumer::CliEventConsumer;
use crate::presentation::{EventLoop, TerminalGuard, terminal};

/// Terminal dashboard frontend.
///
/// Pure UI layer: receives a [`PollerHandle`], subscribes to telemetry
/// events, and renders until the user quits.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    async fn execute(&mut self, handle: PollerHandle) -> Result<()> {
        tracing::info!("CLI dashboard starting...");

        let mut terminal = terminal::init()?;
        let _guard = TerminalGuard;

        let event_rx = handle.subscribe();

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text("Waiting for telemetry...");

        let consumer = CliEventConsumer::new(messages);
        let event_loop = EventLoop::new(
            event_rx,
            consumer,
            self.cli_config.ui.message_panel_height,
        );

        let _consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI dashboard exiting");

        Ok(())
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: PollerHandle) -> Result<()> {
        self.execute(handle).await
    }
}
