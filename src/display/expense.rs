//! Expense display formatting
//!
//! Formats records for terminal output in table and detail views.

use tabled::{settings::Style, Table, Tabled};

use super::format_amount;
use crate::models::{Expense, DATE_FORMAT};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format records as a table, in the order given
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            date: e.date.format(DATE_FORMAT).to_string(),
            category: e.category.clone(),
            amount: format_amount(e.amount, symbol),
            description: e.description.clone(),
        })
        .collect();

    let table = Table::new(rows).with(Style::psql()).to_string();
    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\n{} expense(s), total {}",
        table,
        expenses.len(),
        format_amount(total, symbol)
    )
}

/// Format one record in detail
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:          {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format(DATE_FORMAT)));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Amount:      {}\n", format_amount(expense.amount, symbol)));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output
}
