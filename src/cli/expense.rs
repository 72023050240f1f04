//! Expense CLI commands
//!
//! Add, edit, delete and list expense records.

use chrono::NaiveDate;
use clap::Args;

use super::CommandContext;
use crate::display::format_expense_list;
use crate::error::TrackerResult;
use crate::models::{ExpenseDraft, ExpenseId, Message, DATE_FORMAT};
use crate::services::ExpenseFilter;

/// Fields of an expense as given on the command line
#[derive(Args, Debug, Default)]
pub struct ExpenseArgs {
    /// Amount spent (e.g. "250" or "99.50")
    #[arg(short, long)]
    pub amount: Option<String>,

    /// Category label
    #[arg(short, long)]
    pub category: Option<String>,

    /// Date of the expense (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Optional notes
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Filters for listing expenses
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Text to look for in descriptions (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Message for a rejected draft: required fields missing, or a bad value
fn draft_failure(draft: &ExpenseDraft) -> Message {
    let missing = [&draft.date, &draft.category, &draft.amount]
        .iter()
        .any(|f| f.trim().is_empty());
    if missing {
        Message::MissingFields
    } else {
        Message::InvalidAmount
    }
}

/// Add an expense; the date defaults to today
pub fn handle_add_command(ctx: &mut CommandContext<'_>, args: ExpenseArgs) -> TrackerResult<()> {
    let date = args
        .date
        .unwrap_or_else(|| ctx.today.format(DATE_FORMAT).to_string());
    let draft = ExpenseDraft::new(
        date,
        args.category.unwrap_or_default(),
        args.amount.unwrap_or_default(),
    )
    .with_description(args.description.unwrap_or_default());

    let result = ctx.tracker.add_expense(&draft);
    let expense = ctx.check(result, draft_failure(&draft))?;

    ctx.success(Message::ExpenseAdded);
    println!("{} (id {})", expense, expense.id);
    Ok(())
}

/// Edit an expense; fields not given keep their current value
pub fn handle_edit_command(
    ctx: &mut CommandContext<'_>,
    id: ExpenseId,
    args: ExpenseArgs,
) -> TrackerResult<()> {
    let current = ctx.tracker.records().get(id).cloned();
    let keep = |given: Option<String>, existing: Option<String>| {
        given.or(existing).unwrap_or_default()
    };

    let draft = ExpenseDraft::new(
        keep(
            args.date,
            current.as_ref().map(|e| e.date.format(DATE_FORMAT).to_string()),
        ),
        keep(args.category, current.as_ref().map(|e| e.category.clone())),
        keep(args.amount, current.as_ref().map(|e| e.amount.to_string())),
    )
    .with_description(keep(
        args.description,
        current.as_ref().map(|e| e.description.clone()),
    ));

    let result = ctx.tracker.update_expense(id, &draft);
    let expense = ctx.check(result, draft_failure(&draft))?;

    ctx.success(Message::ExpenseUpdated);
    println!("{}", expense);
    Ok(())
}

/// Delete an expense; a missing id is not an error
pub fn handle_delete_command(ctx: &mut CommandContext<'_>, id: ExpenseId) -> TrackerResult<()> {
    if !ctx.tracker.delete_expense(id) {
        tracing::debug!(%id, "delete of unknown expense id");
    }
    ctx.success(Message::ExpenseDeleted);
    Ok(())
}

/// List expenses, newest first
pub fn handle_list_command(ctx: &CommandContext<'_>, args: ListArgs) -> TrackerResult<()> {
    let filter = ExpenseFilter {
        search: args.search,
        category: args.category,
        date: args.date,
    };
    let expenses = ctx.tracker.query(&filter);
    println!("{}", format_expense_list(&expenses, ctx.symbol()));
    Ok(())
}
