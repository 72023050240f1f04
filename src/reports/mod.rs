//! Reports module for Spendbook
//!
//! Pure aggregation over the record collection and the dashboard summary
//! built from it.

pub mod aggregator;
pub mod summary;

pub use aggregator::{
    budget_usage_percent, by_category, by_month, grand_total, month_bounds, remaining_budget,
    total_for_date, total_for_month, total_for_week, week_bounds,
};
pub use summary::{BudgetStatus, DashboardSummary};
