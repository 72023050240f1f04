//! Encoded snapshot
//!
//! After every write-through a full export document is base64-encoded and
//! stored under its own key, so the complete state can be restored even if
//! the regular keys are damaged.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::{from_json, to_json, ImportedState};
use crate::models::TrackerState;

use super::kv::KeyValueStore;

/// Key the snapshot is stored under
pub const SNAPSHOT_KEY: &str = "expense_backup";

/// Reads and writes the base64 snapshot in a key-value store
pub struct SnapshotStore {
    store: Arc<dyn KeyValueStore>,
}

impl SnapshotStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Encode `state` stamped with `taken_at` and store it
    pub fn write(&self, state: &TrackerState, taken_at: DateTime<Utc>) -> TrackerResult<()> {
        let encoded = encode(state, taken_at)?;
        self.store
            .set(SNAPSHOT_KEY, &encoded)
            .map_err(|e| TrackerError::backend("snapshot", e.to_string()))
    }

    /// Decode the stored snapshot, `None` if there isn't one
    pub fn read(&self) -> TrackerResult<Option<ImportedState>> {
        let stored = self
            .store
            .get(SNAPSHOT_KEY)
            .map_err(|e| TrackerError::backend("snapshot", e.to_string()))?;

        match stored.filter(|s| !s.trim().is_empty()) {
            Some(encoded) => decode(&encoded).map(Some),
            None => Ok(None),
        }
    }

    /// Delete the stored snapshot
    pub fn remove(&self) -> TrackerResult<()> {
        self.store
            .remove(SNAPSHOT_KEY)
            .map_err(|e| TrackerError::backend("snapshot", e.to_string()))
    }
}

/// Base64 (standard alphabet) of the pretty-printed export document
pub fn encode(state: &TrackerState, taken_at: DateTime<Utc>) -> TrackerResult<String> {
    Ok(STANDARD.encode(to_json(state, taken_at)?))
}

/// Inverse of [`encode`]
pub fn decode(encoded: &str) -> TrackerResult<ImportedState> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| TrackerError::Format(format!("Snapshot is not valid base64: {}", e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| TrackerError::Format(format!("Snapshot is not UTF-8: {}", e)))?;
    from_json(&text)
}
