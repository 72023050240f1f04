//! Key-value stores
//!
//! The primary and fallback backends are plain string key-value stores, the
//! shape browser storage has. `FileKeyValueStore` keeps one file per key
//! under a root directory; `MemoryKeyValueStore` lives only as long as the
//! process.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};

use super::file_io::{read_text, remove_file_if_exists, write_atomic};

/// String key-value capability shared by the key-value backends and the
/// snapshot store
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key was never set or was removed
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> TrackerResult<()>;

    /// Delete a key; deleting a missing key is not an error
    fn remove(&self, key: &str) -> TrackerResult<()>;
}

/// Key-value store backed by one file per key
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `root`; the directory is created on first write
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, key: &str) -> TrackerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(TrackerError::Config(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        write_atomic(self.path_for(key)?, value.as_bytes())
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        remove_file_if_exists(self.path_for(key)?)
    }
}

/// In-process key-value store
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.data.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Io(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Io(format!("Failed to acquire write lock: {}", e)))?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Io(format!("Failed to acquire write lock: {}", e)))?;
        data.remove(key);
        Ok(())
    }
}
