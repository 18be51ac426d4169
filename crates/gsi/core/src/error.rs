//! Errors produced while decoding telemetry payloads.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The payload body was not valid JSON or did not match the
    /// documented snapshot shape.
    #[error("malformed snapshot payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
