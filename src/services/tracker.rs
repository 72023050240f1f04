//! Expense tracker
//!
//! The single handle a front end holds. It owns the record store and the
//! reconciler, and every mutation writes the full state through to storage
//! before returning.

use chrono::{DateTime, NaiveDate, Utc};

use super::reconciler::{PersistReport, PersistenceReconciler};
use super::record_store::{ExpenseFilter, RecordStore};
use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;
use crate::export;
use crate::models::{Expense, ExpenseDraft, ExpenseId, Language};
use crate::reports::DashboardSummary;

/// Records, budget and their storage
pub struct ExpenseTracker {
    records: RecordStore,
    reconciler: PersistenceReconciler,
    last_report: PersistReport,
}

impl ExpenseTracker {
    /// Load the state from `reconciler` and take ownership of it
    pub fn new(reconciler: PersistenceReconciler) -> Self {
        let state = reconciler.load();
        tracing::debug!(
            records = state.expenses.len(),
            budget = state.budget,
            "loaded tracker state"
        );

        Self {
            records: RecordStore::from_state(state),
            reconciler,
            last_report: PersistReport::default(),
        }
    }

    /// Open the file-backed tracker for a data directory
    pub fn open(paths: &TrackerPaths, settings: &Settings) -> TrackerResult<Self> {
        Ok(Self::new(PersistenceReconciler::from_settings(paths, settings)?))
    }

    fn write_through(&mut self) {
        self.last_report = self.reconciler.persist(&self.records.state(), Utc::now());
    }

    /// Read-only access to the records
    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// Outcome of the most recent write-through
    pub fn last_report(&self) -> &PersistReport {
        &self.last_report
    }

    /// Add a new expense
    pub fn add_expense(&mut self, draft: &ExpenseDraft) -> TrackerResult<Expense> {
        let expense = self.records.add(draft)?;
        self.write_through();
        Ok(expense)
    }

    /// Replace an existing expense
    pub fn update_expense(
        &mut self,
        id: ExpenseId,
        draft: &ExpenseDraft,
    ) -> TrackerResult<Expense> {
        let expense = self.records.update(id, draft)?;
        self.write_through();
        Ok(expense)
    }

    /// Delete an expense; deleting a missing id is not an error
    pub fn delete_expense(&mut self, id: ExpenseId) -> bool {
        let removed = self.records.remove(id);
        self.write_through();
        removed
    }

    /// Set the monthly budget
    pub fn set_budget(&mut self, amount: f64) -> TrackerResult<()> {
        self.records.set_budget(amount)?;
        self.write_through();
        Ok(())
    }

    /// Drop every record and the budget from memory and all storage
    pub fn clear_all(&mut self) -> &PersistReport {
        self.records.clear();
        self.last_report = self.reconciler.clear_all();
        &self.last_report
    }

    /// Replace the records with those in an export document
    ///
    /// A document without a usable budget keeps the current one. Entries
    /// without a readable id or date are skipped. Returns the number of
    /// records kept.
    pub fn import_json(&mut self, text: &str) -> TrackerResult<usize> {
        let imported = export::from_json(text)?;
        let budget = imported.budget.unwrap_or_else(|| self.records.budget());
        let count = imported.expenses.len();

        self.records.replace_all(imported.expenses, budget);
        self.write_through();
        Ok(count)
    }

    /// Replace the whole state with the stored snapshot
    ///
    /// Returns `None` without touching anything when there is no snapshot.
    pub fn restore_snapshot(&mut self) -> TrackerResult<Option<usize>> {
        let Some(snapshot) = self.reconciler.read_snapshot()? else {
            return Ok(None);
        };

        let count = snapshot.expenses.len();
        self.records
            .replace_all(snapshot.expenses, snapshot.budget.unwrap_or(0.0));
        self.write_through();
        Ok(Some(count))
    }

    /// Full export document as JSON text
    pub fn export_json(&self, exported_at: DateTime<Utc>) -> TrackerResult<String> {
        export::to_json(&self.records.state(), exported_at)
    }

    /// Records as CSV under a header in `language`
    pub fn export_csv(&self, language: Language) -> TrackerResult<String> {
        export::to_csv(self.records.expenses(), language)
    }

    /// Filtered records, newest first
    pub fn query(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        self.records.query(filter)
    }

    /// Dashboard figures relative to `today`
    pub fn dashboard(&self, today: NaiveDate) -> DashboardSummary {
        DashboardSummary::generate(self.records.expenses(), self.records.budget(), today)
    }
}
