//! Key-value backend
//!
//! Stores the record list as a JSON array under `expenses` and the budget as
//! plain text under `budget`, in any `KeyValueStore`. Used for both the
//! primary and the fallback backend.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{coerce_amount, decode_expense_list, TrackerState};

use super::backend::{BackendRole, BackendSnapshot, StorageBackend};
use super::kv::KeyValueStore;

/// Key holding the JSON record list
pub const EXPENSES_KEY: &str = "expenses";

/// Key holding the budget as text
pub const BUDGET_KEY: &str = "budget";

/// Backend writing the state into a key-value store
pub struct KeyValueBackend {
    name: String,
    role: BackendRole,
    store: Arc<dyn KeyValueStore>,
}

impl KeyValueBackend {
    pub fn new(name: impl Into<String>, role: BackendRole, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            name: name.into(),
            role,
            store,
        }
    }

    fn wrap(&self, err: TrackerError) -> TrackerError {
        TrackerError::backend(&self.name, err.to_string())
    }
}

impl StorageBackend for KeyValueBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> BackendRole {
        self.role
    }

    fn load(&self) -> TrackerResult<BackendSnapshot> {
        let raw_expenses = self.store.get(EXPENSES_KEY).map_err(|e| self.wrap(e))?;
        let raw_budget = self.store.get(BUDGET_KEY).map_err(|e| self.wrap(e))?;

        // An empty value counts as absent
        let expenses = match raw_expenses.filter(|s| !s.trim().is_empty()) {
            Some(text) => {
                let value: Value = serde_json::from_str(&text).map_err(|e| {
                    TrackerError::backend(&self.name, format!("Stored expenses unreadable: {}", e))
                })?;
                Some(decode_expense_list(value).map_err(|e| self.wrap(e))?)
            }
            None => None,
        };

        let budget = raw_budget
            .filter(|s| !s.trim().is_empty())
            .map(|text| coerce_amount(&Value::String(text)).max(0.0));

        Ok(BackendSnapshot { expenses, budget })
    }

    fn save(&self, state: &TrackerState) -> TrackerResult<()> {
        let expenses = serde_json::to_string(&state.expenses).map_err(|e| self.wrap(e.into()))?;
        self.store
            .set(EXPENSES_KEY, &expenses)
            .map_err(|e| self.wrap(e))?;
        self.store
            .set(BUDGET_KEY, &state.budget.to_string())
            .map_err(|e| self.wrap(e))?;
        Ok(())
    }

    fn clear(&self) -> TrackerResult<()> {
        self.store.remove(EXPENSES_KEY).map_err(|e| self.wrap(e))?;
        self.store.remove(BUDGET_KEY).map_err(|e| self.wrap(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseId};
    use crate::storage::kv::MemoryKeyValueStore;
    use chrono::NaiveDate;

    fn backend() -> (Arc<MemoryKeyValueStore>, KeyValueBackend) {
        let store = Arc::new(MemoryKeyValueStore::new());
        let backend = KeyValueBackend::new("primary", BackendRole::Primary, store.clone());
        (store, backend)
    }

    fn expense(id: i64, amount: f64) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            category: "Food".into(),
            amount,
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_store_is_absent() {
        let (_store, backend) = backend();
        assert_eq!(backend.load().unwrap(), BackendSnapshot::default());
    }

    #[test]
    fn test_save_and_load() {
        let (store, backend) = backend();
        let state = TrackerState::new(vec![expense(1, 10.0), expense(2, 20.5)], 1000.0);

        backend.save(&state).unwrap();
        assert_eq!(store.get(BUDGET_KEY).unwrap().as_deref(), Some("1000"));

        let loaded = backend.load().unwrap();
        assert_eq!(loaded, BackendSnapshot::from_state(&state));
    }

    #[test]
    fn test_load_coerces_corrupted_amounts() {
        let (store, backend) = backend();
        store
            .set(
                EXPENSES_KEY,
                r#"[{"id":1,"date":"2024-03-01","category":"Food","amount":"12.5"},
                    {"id":2,"date":"2024-03-02","category":"Food","amount":"junk"}]"#,
            )
            .unwrap();
        store.set(BUDGET_KEY, "not a number").unwrap();

        let loaded = backend.load().unwrap();
        let expenses = loaded.expenses.unwrap();
        assert_eq!(expenses[0].amount, 12.5);
        assert_eq!(expenses[1].amount, 0.0);
        assert_eq!(loaded.budget, Some(0.0));
    }

    #[test]
    fn test_unparsable_list_is_backend_error() {
        let (store, backend) = backend();
        store.set(EXPENSES_KEY, "{broken").unwrap();

        let err = backend.load().unwrap_err();
        assert!(matches!(err, TrackerError::Backend { .. }));
    }

    #[test]
    fn test_clear_removes_keys() {
        let (store, backend) = backend();
        backend
            .save(&TrackerState::new(vec![expense(1, 1.0)], 5.0))
            .unwrap();
        backend.clear().unwrap();
        assert!(store.is_empty());
    }
}
