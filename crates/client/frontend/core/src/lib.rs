//! Cross-frontend primitives for presenting live telemetry.
//!
//! Houses the display-set view model, message logging, event handling,
//! and configuration that both the CLI and future graphical clients can
//! reuse. Everything here is renderer-agnostic: the view model is a
//! pure function of the snapshot, and rendering is a swappable
//! [`Frontend`] adapter.

pub mod config;
pub mod event;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{DisplaySet, PoolView};
