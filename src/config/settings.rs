//! User settings for Spendbook
//!
//! Manages user preferences: display language and currency symbol, the log
//! level, and which redundant storage backends are active.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Language;

/// Which secondary backends the reconciler writes to and reads from
///
/// The primary key-value store is always active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendToggles {
    /// Fallback key-value store
    #[serde(default = "enabled")]
    pub fallback: bool,
    /// Structured record store (backfill source on load)
    #[serde(default = "enabled")]
    pub structured: bool,
    /// Base64 snapshot stored beside the primary data
    #[serde(default = "enabled")]
    pub snapshot: bool,
}

impl Default for BackendToggles {
    fn default() -> Self {
        Self {
            fallback: true,
            structured: true,
            snapshot: true,
        }
    }
}

fn enabled() -> bool {
    true
}

/// User settings for Spendbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Language for month names, CSV headers and notifications
    #[serde(default)]
    pub language: Language,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Log filter directive handed to the tracing subscriber
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Active storage backends
    #[serde(default)]
    pub backends: BackendToggles,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            language: Language::default(),
            currency_symbol: default_currency(),
            log_level: default_log_level(),
            backends: BackendToggles::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
