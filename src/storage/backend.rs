//! Storage backend capability
//!
//! Every redundant store the tracker writes through to sits behind the same
//! `{load, save, clear}` interface. A backend's role decides how its data is
//! weighed when the reconciler merges what was loaded.

use std::fmt;

use crate::error::TrackerResult;
use crate::models::{Expense, TrackerState};

/// How a backend's data participates in load reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendRole {
    /// First choice for each field
    Primary,
    /// Used for a field only when no higher-ranked backend had it
    Fallback,
    /// Fills in only when the merged result is empty (records) or zero (budget)
    Backfill,
}

impl fmt::Display for BackendRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Fallback => write!(f, "fallback"),
            Self::Backfill => write!(f, "backfill"),
        }
    }
}

/// What a single backend had stored
///
/// `None` means the field was absent, which is different from an empty
/// record list or a zero budget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackendSnapshot {
    pub expenses: Option<Vec<Expense>>,
    pub budget: Option<f64>,
}

impl BackendSnapshot {
    /// Snapshot with both fields present
    pub fn from_state(state: &TrackerState) -> Self {
        Self {
            expenses: Some(state.expenses.clone()),
            budget: Some(state.budget),
        }
    }
}

/// Uniform capability every storage backend provides
pub trait StorageBackend: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Reconciliation role
    fn role(&self) -> BackendRole;

    /// Read whatever this backend holds
    fn load(&self) -> TrackerResult<BackendSnapshot>;

    /// Replace this backend's contents with `state`
    fn save(&self, state: &TrackerState) -> TrackerResult<()>;

    /// Remove everything this backend holds
    fn clear(&self) -> TrackerResult<()>;
}
