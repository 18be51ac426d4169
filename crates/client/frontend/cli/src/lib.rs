//! Terminal UI frontend for the telemetry HUD.
//!
//! This crate renders the derived [`DisplaySet`] into a terminal
//! dashboard. It implements the `client_frontend_core::Frontend` trait
//! for pure UI rendering: it receives a `PollerHandle`, subscribes to
//! telemetry events, and never touches the transport itself.
//!
//! [`DisplaySet`]: client_frontend_core::DisplaySet

mod app;
mod config;
mod event_consumer;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::CliConfig;
pub use event_consumer::CliEventConsumer;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
