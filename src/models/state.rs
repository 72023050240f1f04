//! Tracker state
//!
//! The full persisted state: every expense record plus the single monthly
//! budget ceiling.

use serde::{Deserialize, Serialize};

use super::expense::Expense;

/// Records and budget, as written to and read from every backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    /// All expense records, in no particular order
    pub expenses: Vec<Expense>,

    /// Monthly budget ceiling; 0 means no budget set
    pub budget: f64,
}

impl TrackerState {
    /// Create a state from parts
    pub fn new(expenses: Vec<Expense>, budget: f64) -> Self {
        Self { expenses, budget }
    }

    /// True when there are no records and no budget
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.budget == 0.0
    }
}
