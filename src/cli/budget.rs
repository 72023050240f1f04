//! Budget CLI commands
//!
//! Implements CLI commands for setting the monthly budget and checking
//! spending against it.

use clap::Subcommand;

use super::CommandContext;
use crate::display::format_budget_status;
use crate::error::TrackerResult;
use crate::models::{parse_positive_amount, Message};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget
    Set {
        /// Amount (e.g. "10000" or "7500.50")
        amount: String,
    },

    /// Show this month's spending against the budget
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    ctx: &mut CommandContext<'_>,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let result = parse_positive_amount(&amount).and_then(|a| ctx.tracker.set_budget(a));
            ctx.check(result, Message::InvalidBudget)?;
            ctx.success(Message::BudgetSet);
        }

        BudgetCommands::Show => {
            let summary = ctx.tracker.dashboard(ctx.today);
            print!("{}", format_budget_status(&summary.budget, ctx.symbol()));
        }
    }

    Ok(())
}
