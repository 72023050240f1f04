//! Record store
//!
//! The authoritative in-memory collection of expenses plus the monthly
//! budget. All mutations here are in-memory only; write-through is the
//! tracker's job.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId, IdGenerator, TrackerState};

/// Conjunctive filter for [`RecordStore::query`]
///
/// Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Case-insensitive substring of the description
    pub search: Option<String>,
    /// Exact category
    pub category: Option<String>,
    /// Exact date
    pub date: Option<NaiveDate>,
}

impl ExpenseFilter {
    fn matches(&self, expense: &Expense) -> bool {
        let search = self.search.as_deref().map(str::trim).unwrap_or("");
        if !search.is_empty() && !expense.description_contains(search) {
            return false;
        }

        let category = self.category.as_deref().map(str::trim).unwrap_or("");
        if !category.is_empty() && expense.category != category {
            return false;
        }

        self.date.map_or(true, |date| expense.date == date)
    }
}

/// In-memory expenses and budget
#[derive(Debug, Default)]
pub struct RecordStore {
    expenses: Vec<Expense>,
    budget: f64,
    ids: IdGenerator,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `state`
    pub fn from_state(state: TrackerState) -> Self {
        let mut store = Self::new();
        store.replace_all(state.expenses, state.budget);
        store
    }

    /// Validate `draft` and append it under a fresh id
    pub fn add(&mut self, draft: &ExpenseDraft) -> TrackerResult<Expense> {
        let valid = draft.validate()?;
        let existing = &self.expenses;
        let id = self.ids.next_id(|id| existing.iter().any(|e| e.id == id));
        let expense = Expense::from_draft(id, valid);
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Replace the record `id` with `draft`, keeping its id
    pub fn update(&mut self, id: ExpenseId, draft: &ExpenseDraft) -> TrackerResult<Expense> {
        let valid = draft.validate()?;
        let slot = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))?;

        *slot = Expense::from_draft(id, valid);
        Ok(slot.clone())
    }

    /// Delete the record `id`; returns whether anything was removed
    pub fn remove(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    /// Overwrite the monthly budget
    pub fn set_budget(&mut self, amount: f64) -> TrackerResult<()> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TrackerError::Validation(format!(
                "Invalid budget '{}', expected a number greater than zero",
                amount
            )));
        }
        self.budget = amount;
        Ok(())
    }

    /// Drop every record and reset the budget to 0
    pub fn clear(&mut self) {
        self.expenses.clear();
        self.budget = 0.0;
    }

    /// Replace the whole collection
    ///
    /// Records sharing an id with an earlier one get a fresh id. A negative or
    /// non-finite budget is stored as 0.
    pub fn replace_all(&mut self, expenses: Vec<Expense>, budget: f64) {
        let mut ids = IdGenerator::default();
        for expense in &expenses {
            ids.observe(expense.id);
        }

        let mut seen = HashSet::with_capacity(expenses.len());
        self.expenses = expenses
            .into_iter()
            .map(|mut expense| {
                if !seen.insert(expense.id) {
                    let fresh = ids.next_id(|id| seen.contains(&id));
                    tracing::warn!(
                        duplicate = %expense.id,
                        %fresh,
                        "re-keying duplicate expense id"
                    );
                    expense.id = fresh;
                    seen.insert(fresh);
                }
                expense
            })
            .collect();

        self.budget = if budget.is_finite() { budget.max(0.0) } else { 0.0 };
        self.ids = ids;
    }

    /// Matching records, newest date first
    pub fn query(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        let mut matches: Vec<Expense> = self
            .expenses
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches
    }

    /// Look up one record
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// All records in storage order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Copy of the current state, for persisting or exporting
    pub fn state(&self) -> TrackerState {
        TrackerState::new(self.expenses.clone(), self.budget)
    }
}
