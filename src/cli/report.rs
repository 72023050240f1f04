//! Report CLI commands
//!
//! Dashboard totals, the category breakdown and the monthly comparison.

use chrono::Datelike;
use clap::Subcommand;

use super::CommandContext;
use crate::display::{format_categories, format_dashboard, format_months};
use crate::error::TrackerResult;
use crate::reports::{by_category, by_month};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Today, week, month and all-time totals with budget status
    Dashboard,

    /// Spending per category, largest first
    Categories,

    /// Spending per month of a year
    Monthly {
        /// Year to report on (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
}

/// Handle a report command
pub fn handle_report_command(ctx: &CommandContext<'_>, cmd: ReportCommands) -> TrackerResult<()> {
    let expenses = ctx.tracker.records().expenses();

    match cmd {
        ReportCommands::Dashboard => {
            let summary = ctx.tracker.dashboard(ctx.today);
            print!("{}", format_dashboard(&summary, ctx.symbol()));
        }

        ReportCommands::Categories => {
            print!("{}", format_categories(&by_category(expenses), ctx.symbol()));
        }

        ReportCommands::Monthly { year } => {
            let year = year.unwrap_or_else(|| ctx.today.year());
            print!(
                "{}",
                format_months(&by_month(expenses, year), year, ctx.language(), ctx.symbol())
            );
        }
    }

    Ok(())
}
