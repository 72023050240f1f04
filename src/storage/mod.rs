//! Storage layer for Spendbook
//!
//! Redundant backends behind one `StorageBackend` capability: two key-value
//! stores (primary and fallback), a structured record store, and a base64
//! snapshot kept beside the primary data.

pub mod backend;
pub mod file_io;
pub mod key_value;
pub mod kv;
pub mod records;
pub mod snapshot;

use std::sync::Arc;

pub use backend::{BackendRole, BackendSnapshot, StorageBackend};
pub use file_io::{read_json, read_text, write_atomic, write_json_atomic};
pub use key_value::KeyValueBackend;
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use records::RecordBackend;
pub use snapshot::SnapshotStore;

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerError;

/// The ranked backends and snapshot store for a data directory
pub struct StorageLayout {
    pub backends: Vec<Box<dyn StorageBackend>>,
    pub snapshot: Option<SnapshotStore>,
}

impl StorageLayout {
    /// Build the file-backed layout under `paths`, honouring the backend toggles
    pub fn for_paths(paths: &TrackerPaths, settings: &Settings) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        let primary: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(paths.primary_dir()));
        let mut backends: Vec<Box<dyn StorageBackend>> = vec![Box::new(KeyValueBackend::new(
            "primary",
            BackendRole::Primary,
            primary.clone(),
        ))];

        if settings.backends.fallback {
            backends.push(Box::new(KeyValueBackend::new(
                "fallback",
                BackendRole::Fallback,
                Arc::new(FileKeyValueStore::new(paths.fallback_dir())),
            )));
        }

        if settings.backends.structured {
            backends.push(Box::new(RecordBackend::new(paths.records_file())));
        }

        let snapshot = settings
            .backends
            .snapshot
            .then(|| SnapshotStore::new(primary));

        Ok(Self { backends, snapshot })
    }
}
