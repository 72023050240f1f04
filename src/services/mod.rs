//! Service layer for Spendbook
//!
//! The service layer owns the in-memory records, keeps the storage backends
//! in step with them, and exposes the operations the front end calls.

pub mod reconciler;
pub mod record_store;
pub mod tracker;

pub use reconciler::{reconcile, BackendOutcome, PersistReport, PersistenceReconciler};
pub use record_store::{ExpenseFilter, RecordStore};
pub use tracker::ExpenseTracker;
