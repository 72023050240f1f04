//! Structured record backend
//!
//! An object store keyed by record id. The budget shares the store under the
//! reserved `budget` key, which can never collide with an integer id.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::{json, Value};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{coerce_amount, decode_expense_list, TrackerState};

use super::backend::{BackendRole, BackendSnapshot, StorageBackend};
use super::file_io::{read_json, remove_file_if_exists, write_json_atomic};

/// Sentinel key the budget entry is stored under
pub const BUDGET_SENTINEL: &str = "budget";

/// Backend storing each record as its own keyed entry in a JSON file
#[derive(Debug, Clone)]
pub struct RecordBackend {
    name: String,
    role: BackendRole,
    path: PathBuf,
}

impl RecordBackend {
    /// Create a record backend at `path`, used as backfill source on load
    pub fn new(path: PathBuf) -> Self {
        Self {
            name: "records".to_string(),
            role: BackendRole::Backfill,
            path,
        }
    }

    fn wrap(&self, err: TrackerError) -> TrackerError {
        TrackerError::backend(&self.name, err.to_string())
    }

    fn is_sentinel(key: &str, entry: &Value) -> bool {
        key == BUDGET_SENTINEL || entry.get("id").and_then(Value::as_str) == Some(BUDGET_SENTINEL)
    }
}

impl StorageBackend for RecordBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> BackendRole {
        self.role
    }

    fn load(&self) -> TrackerResult<BackendSnapshot> {
        let Some(entries) =
            read_json::<BTreeMap<String, Value>, _>(&self.path).map_err(|e| self.wrap(e))?
        else {
            return Ok(BackendSnapshot::default());
        };

        let budget = entries
            .get(BUDGET_SENTINEL)
            .map(|entry| coerce_amount(entry.get("value").unwrap_or(&Value::Null)).max(0.0));

        let records: Vec<Value> = entries
            .into_iter()
            .filter(|(key, entry)| !Self::is_sentinel(key, entry))
            .map(|(_, entry)| entry)
            .collect();
        let expenses = decode_expense_list(Value::Array(records)).map_err(|e| self.wrap(e))?;

        Ok(BackendSnapshot {
            expenses: Some(expenses),
            budget,
        })
    }

    fn save(&self, state: &TrackerState) -> TrackerResult<()> {
        let mut entries = BTreeMap::new();
        for expense in &state.expenses {
            let entry = serde_json::to_value(expense).map_err(|e| self.wrap(e.into()))?;
            entries.insert(expense.id.to_string(), entry);
        }
        entries.insert(
            BUDGET_SENTINEL.to_string(),
            json!({ "id": BUDGET_SENTINEL, "value": state.budget }),
        );

        write_json_atomic(&self.path, &entries).map_err(|e| self.wrap(e))
    }

    fn clear(&self) -> TrackerResult<()> {
        remove_file_if_exists(&self.path).map_err(|e| self.wrap(e))
    }
}
