//! Dashboard summary
//!
//! Everything the dashboard shows, computed in one pass over the records for
//! a given day: period totals, budget status and the two chart series.

use chrono::{Datelike, Month, NaiveDate};

use super::aggregator;
use crate::models::Expense;

/// How the current month stands against the budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    /// Monthly budget; 0 when none is set
    pub budget: f64,
    /// Spent in the current month
    pub spent: f64,
    /// Budget left, never below 0
    pub remaining: f64,
    /// Spent as a percentage of the budget, uncapped
    pub usage_percent: f64,
    /// A budget is set and this month's spending exceeds it
    pub over_budget: bool,
}

impl BudgetStatus {
    /// Compute the status for `spent` against `budget`
    pub fn new(budget: f64, spent: f64) -> Self {
        Self {
            budget,
            spent,
            remaining: aggregator::remaining_budget(budget, spent),
            usage_percent: aggregator::budget_usage_percent(budget, spent),
            over_budget: budget > 0.0 && spent > budget,
        }
    }

    /// Usage clamped to 0..=100 for progress bars
    pub fn usage_for_display(&self) -> f64 {
        self.usage_percent.clamp(0.0, 100.0)
    }
}

/// Dashboard figures for one day
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// The day everything is relative to
    pub today: NaiveDate,
    pub today_total: f64,
    pub week_total: f64,
    pub month_total: f64,
    pub grand_total: f64,
    pub budget: BudgetStatus,
    /// Category totals, largest first
    pub categories: Vec<(String, f64)>,
    /// Totals per month of the current year, calendar order
    pub months: Vec<(Month, f64)>,
}

impl DashboardSummary {
    /// Build the summary for `today`
    pub fn generate(expenses: &[Expense], budget: f64, today: NaiveDate) -> Self {
        let month_total = aggregator::total_for_month(expenses, today);

        Self {
            today,
            today_total: aggregator::total_for_date(expenses, today),
            week_total: aggregator::total_for_week(expenses, today),
            month_total,
            grand_total: aggregator::grand_total(expenses),
            budget: BudgetStatus::new(budget, month_total),
            categories: aggregator::by_category(expenses),
            months: aggregator::by_month(expenses, today.year()),
        }
    }

    /// The `limit` categories with the most spending
    pub fn top_categories(&self, limit: usize) -> &[(String, f64)] {
        &self.categories[..limit.min(self.categories.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn expense(id: i64, day: &str, category: &str, amount: f64) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
            category: category.into(),
            amount,
            description: String::new(),
        }
    }

    #[test]
    fn test_generate_dashboard() {
        let expenses = vec![
            expense(1, "2024-03-01", "Food", 100.0),
            expense(2, "2024-03-20", "Food", 50.0),
            expense(3, "2024-04-01", "Rent", 500.0),
            expense(4, "2023-11-11", "Bills", 25.0),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();

        let summary = DashboardSummary::generate(&expenses, 120.0, today);

        assert_eq!(summary.today_total, 50.0);
        assert_eq!(summary.week_total, 50.0);
        assert_eq!(summary.month_total, 150.0);
        assert_eq!(summary.grand_total, 675.0);
        assert!(summary.budget.over_budget);
        assert_eq!(summary.budget.remaining, 0.0);
        assert_eq!(summary.budget.usage_percent, 125.0);
        assert_eq!(summary.budget.usage_for_display(), 100.0);
        assert_eq!(summary.top_categories(1), &[("Rent".to_string(), 500.0)]);
        assert_eq!(
            summary.months,
            vec![(Month::March, 150.0), (Month::April, 500.0)]
        );
    }

    #[test]
    fn test_no_budget_is_never_over() {
        let status = BudgetStatus::new(0.0, 300.0);
        assert!(!status.over_budget);
        assert_eq!(status.usage_percent, 0.0);
        assert_eq!(status.remaining, 0.0);
    }

    #[test]
    fn test_empty_dashboard() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let summary = DashboardSummary::generate(&[], 0.0, today);
        assert_eq!(summary.grand_total, 0.0);
        assert!(summary.categories.is_empty());
        assert!(summary.months.is_empty());
        assert!(summary.top_categories(5).is_empty());
    }
}
