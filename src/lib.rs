//! Spendbook - personal expense tracker
//!
//! This library provides the core of the Spendbook expense tracker: an
//! in-memory record store with a monthly budget, write-through persistence
//! to several redundant local stores, pure aggregation for the dashboard,
//! and a JSON/CSV import-export codec.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, ids, state, localized labels)
//! - `storage`: Redundant storage backends and the encoded snapshot
//! - `services`: Record store, persistence reconciler and the tracker handle
//! - `reports`: Aggregation and the dashboard summary
//! - `export`: JSON and CSV codec
//! - `notify`: User notifications
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use spendbook::config::{Settings, TrackerPaths};
//! use spendbook::models::ExpenseDraft;
//! use spendbook::services::ExpenseTracker;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut tracker = ExpenseTracker::open(&paths, &settings)?;
//! tracker.add_expense(&ExpenseDraft::new("2024-03-01", "Food", "120"))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod notify;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TrackerError;
