//! JSON snapshot of the whole [`AppState`], as stored under [`STATE_KEY`].
//!
//! The record is overwritten wholesale on every change and read back at
//! startup. There is no schema version; missing top-level fields take their
//! defaults.

use crate::state::AppState;

/// Storage key for the persisted state.
pub const STATE_KEY: &str = "taskManagerState";

/// Errors from encoding or decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The state could not be serialized.
    #[error("snapshot encode error: {0}")]
    Encode(#[source] serde_json::Error),
    /// The payload is not a valid snapshot.
    #[error("snapshot decode error: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Serializes `state` to its JSON snapshot.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] if serialization fails.
pub fn encode(state: &AppState) -> Result<String, SnapshotError> {
    serde_json::to_string(state).map_err(SnapshotError::Encode)
}

/// Parses a JSON snapshot.
///
/// # Errors
///
/// Returns [`SnapshotError::Decode`] if the payload is malformed.
pub fn decode(payload: &str) -> Result<AppState, SnapshotError> {
    serde_json::from_str(payload).map_err(SnapshotError::Decode)
}
