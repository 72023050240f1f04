//! Core data models for Spendbook
//!
//! Expense records, the tracker state they live in, ids, and localized
//! labels.

pub mod expense;
pub mod ids;
pub mod locale;
pub mod state;

pub use expense::{
    coerce_amount, decode_expense_list, parse_positive_amount, Expense, ExpenseDraft, RawExpense,
    ValidDraft, DATE_FORMAT,
};
pub use ids::{ExpenseId, IdGenerator};
pub use locale::{Language, Message};
pub use state::TrackerState;
