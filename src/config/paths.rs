//! Path management for Spendbook
//!
//! Resolves where settings, the storage backends and exported files live.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit base directory (the `--data-dir` flag)
//! 2. The platform data directory from `directories::ProjectDirs`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Manages all paths used by Spendbook
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for all Spendbook data
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance rooted at the platform data dir
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let dirs = ProjectDirs::from("com", "Spendbook", "spendbook").ok_or_else(|| {
            TrackerError::Config("Could not determine platform data directory".into())
        })?;

        Ok(Self {
            base_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Create TrackerPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding every storage backend
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Root of the primary key-value store
    pub fn primary_dir(&self) -> PathBuf {
        self.data_dir().join("primary")
    }

    /// Root of the fallback key-value store
    pub fn fallback_dir(&self) -> PathBuf {
        self.data_dir().join("fallback")
    }

    /// File backing the structured record store
    pub fn records_file(&self) -> PathBuf {
        self.data_dir().join("records.json")
    }

    /// Default directory for CSV/JSON exports
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| TrackerError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }
}
