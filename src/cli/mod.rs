//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the tracker.

pub mod budget;
pub mod data;
pub mod expense;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use data::{
    handle_clear_command, handle_export_command, handle_import_command, handle_restore_command,
    ExportCommands,
};
pub use expense::{
    handle_add_command, handle_delete_command, handle_edit_command, handle_list_command,
    ExpenseArgs, ListArgs,
};
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;

use crate::config::{Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Language, Message};
use crate::notify::{Notifier, Severity};
use crate::services::ExpenseTracker;

/// Everything a command handler works with
pub struct CommandContext<'a> {
    pub tracker: ExpenseTracker,
    pub paths: &'a TrackerPaths,
    pub settings: &'a Settings,
    pub notifier: &'a dyn Notifier,
    /// The day relative totals and default dates use
    pub today: NaiveDate,
}

impl<'a> CommandContext<'a> {
    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Announce a completed action
    pub fn success(&self, message: Message) {
        self.notifier
            .notify(self.language().message(message), Severity::Success);
    }

    /// Announce something that is neither success nor failure
    pub fn info(&self, message: Message) {
        self.notifier
            .notify(self.language().message(message), Severity::Info);
    }

    /// Pass `result` through, announcing user-facing failures first
    ///
    /// Validation failures are announced as `validation`; missing records
    /// and bad files get their own messages. Other errors are left to the
    /// caller.
    pub fn check<T>(&self, result: TrackerResult<T>, validation: Message) -> TrackerResult<T> {
        if let Err(err) = &result {
            if err.is_user_facing() {
                let message = match err {
                    TrackerError::NotFound { .. } => Message::ExpenseNotFound,
                    TrackerError::Format(_) => Message::BadFileFormat,
                    _ => validation,
                };
                self.notifier.notify(
                    &format!("{} ({})", self.language().message(message), err),
                    Severity::Error,
                );
            }
        }
        result
    }
}
