//! Display formatting for terminal output
//!
//! Renders records and report figures as tables for the command line front
//! end. Amounts are shown with the configured currency symbol and two
//! decimals.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_list};
pub use report::{format_budget_status, format_categories, format_dashboard, format_months};

/// Format an amount as `<symbol><amount>` with two decimals
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a percentage with one decimal
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}
