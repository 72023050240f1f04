//! Report display formatting
//!
//! Tables for the dashboard, the category breakdown and the monthly
//! comparison.

use chrono::Month;
use tabled::{settings::Style, Table, Tabled};

use super::{format_amount, format_percent};
use crate::models::Language;
use crate::reports::{BudgetStatus, DashboardSummary};

#[derive(Tabled)]
struct LabelRow {
    #[tabled(rename = "")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

fn label_table(rows: Vec<LabelRow>) -> String {
    Table::new(rows).with(Style::psql()).to_string()
}

/// Period totals, budget status and the top categories
pub fn format_dashboard(summary: &DashboardSummary, symbol: &str) -> String {
    let totals = vec![
        LabelRow {
            label: "Today".into(),
            amount: format_amount(summary.today_total, symbol),
        },
        LabelRow {
            label: "This week".into(),
            amount: format_amount(summary.week_total, symbol),
        },
        LabelRow {
            label: "This month".into(),
            amount: format_amount(summary.month_total, symbol),
        },
        LabelRow {
            label: "All time".into(),
            amount: format_amount(summary.grand_total, symbol),
        },
    ];

    let mut output = format!("Dashboard for {}\n", summary.today);
    output.push_str(&label_table(totals));
    output.push_str("\n\n");
    output.push_str(&format_budget_status(&summary.budget, symbol));

    let top = summary.top_categories(5);
    if !top.is_empty() {
        output.push_str("\nTop categories\n");
        output.push_str(&format_categories(top, symbol));
    }
    output
}

/// Budget, spent, remaining and usage, with a warning line when over budget
pub fn format_budget_status(status: &BudgetStatus, symbol: &str) -> String {
    if status.budget <= 0.0 {
        return "No monthly budget set.\n".to_string();
    }

    let rows = vec![
        LabelRow {
            label: "Budget".into(),
            amount: format_amount(status.budget, symbol),
        },
        LabelRow {
            label: "Spent".into(),
            amount: format_amount(status.spent, symbol),
        },
        LabelRow {
            label: "Remaining".into(),
            amount: format_amount(status.remaining, symbol),
        },
        LabelRow {
            label: "Used".into(),
            amount: format_percent(status.usage_percent),
        },
    ];

    let mut output = label_table(rows);
    output.push('\n');
    if status.over_budget {
        output.push_str(&format!(
            "Warning: this month's spending is over budget by {}\n",
            format_amount(status.spent - status.budget, symbol)
        ));
    }
    output
}

/// Category totals with each one's share of the whole
pub fn format_categories(categories: &[(String, f64)], symbol: &str) -> String {
    if categories.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let total: f64 = categories.iter().map(|(_, amount)| amount).sum();
    let rows: Vec<ShareRow> = categories
        .iter()
        .map(|(name, amount)| ShareRow {
            name: name.clone(),
            amount: format_amount(*amount, symbol),
            share: format_percent(if total > 0.0 { amount / total * 100.0 } else { 0.0 }),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output
}

/// Month totals under localized month names
pub fn format_months(
    months: &[(Month, f64)],
    year: i32,
    language: Language,
    symbol: &str,
) -> String {
    if months.is_empty() {
        return format!("No expenses in {}.\n", year);
    }

    let rows: Vec<LabelRow> = months
        .iter()
        .map(|(month, amount)| LabelRow {
            label: language.month_name(*month).to_string(),
            amount: format_amount(*amount, symbol),
        })
        .collect();

    let mut output = format!("{}\n", year);
    output.push_str(&label_table(rows));
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseId};
    use chrono::NaiveDate;

    fn create_test_summary(budget: f64) -> DashboardSummary {
        let expenses = vec![
            Expense {
                id: ExpenseId::new(1),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                category: "Food".into(),
                amount: 100.0,
                description: String::new(),
            },
            Expense {
                id: ExpenseId::new(2),
                date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                category: "Rent".into(),
                amount: 300.0,
                description: String::new(),
            },
        ];
        DashboardSummary::generate(&expenses, budget, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
    }

    #[test]
    fn test_dashboard_over_budget() {
        let output = format_dashboard(&create_test_summary(250.0), "₹");
        assert!(output.contains("₹400.00"));
        assert!(output.contains("160.0%"));
        assert!(output.contains("over budget by ₹150.00"));
        assert!(output.contains("Top categories"));
    }

    #[test]
    fn test_dashboard_without_budget() {
        let output = format_dashboard(&create_test_summary(0.0), "₹");
        assert!(output.contains("No monthly budget set."));
        assert!(!output.contains("Warning"));
    }

    #[test]
    fn test_categories_share() {
        let output = format_categories(
            &[("Rent".to_string(), 300.0), ("Food".to_string(), 100.0)],
            "₹",
        );
        assert!(output.contains("75.0%"));
        assert!(output.contains("25.0%"));
    }

    #[test]
    fn test_months_localized() {
        let output = format_months(&[(Month::March, 400.0)], 2024, Language::Gujarati, "₹");
        assert!(output.contains("માર્ચ"));
        assert!(output.contains("₹400.00"));

        let output = format_months(&[], 2024, Language::English, "₹");
        assert_eq!(output, "No expenses in 2024.\n");
    }
}
