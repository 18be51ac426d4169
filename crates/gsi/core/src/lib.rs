//! Pure domain layer for the live game telemetry HUD.
//!
//! Holds the deserialized snapshot model of the Game State Integration
//! payload plus every derivation the dashboard displays: clock
//! formatting, XP/level progress, per-minute rates, gold breakdown,
//! buyback math, and cosmetic name handling.
//!
//! Everything in this crate is a pure function of the current snapshot.
//! Rates are cumulative totals divided by elapsed game time, so no
//! cross-snapshot memory exists anywhere in the derivation pipeline.

pub mod clock;
pub mod economy;
pub mod error;
pub mod hero;
pub mod levels;
pub mod resources;
pub mod snapshot;

pub use error::SnapshotError;
pub use snapshot::{HeroState, MapState, PlayerState, Snapshot};
