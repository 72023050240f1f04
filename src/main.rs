use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spendbook::cli::{
    handle_add_command, handle_budget_command, handle_clear_command, handle_delete_command,
    handle_edit_command, handle_export_command, handle_import_command, handle_list_command,
    handle_report_command, handle_restore_command, BudgetCommands, CommandContext, ExpenseArgs,
    ExportCommands, ListArgs, ReportCommands,
};
use spendbook::config::{Settings, TrackerPaths};
use spendbook::models::ExpenseId;
use spendbook::notify::ConsoleNotifier;
use spendbook::services::ExpenseTracker;

#[derive(Parser)]
#[command(
    name = "spendbook",
    version,
    about = "Personal expense tracker with a monthly budget",
    long_about = "Spendbook records daily expenses, tracks spending against a monthly \
                  budget, and keeps redundant copies of your data so nothing is lost \
                  if one store goes bad."
)]
struct Cli {
    /// Use this directory for data and settings instead of the default
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(ExpenseArgs),

    /// Change an existing expense
    Edit {
        /// Expense ID
        id: ExpenseId,
        #[command(flatten)]
        fields: ExpenseArgs,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: ExpenseId,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Replace all data with an exported JSON document
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Restore all data from the internal backup
    Restore,

    /// Delete all data
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the settings file with the values shown
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_level))
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("Spendbook - personal expense tracker");
        println!();
        println!("Run 'spendbook --help' for usage information.");
        return Ok(ExitCode::SUCCESS);
    };

    if let Commands::Config { write } = command {
        if write {
            settings.save(&paths)?;
        }
        println!("Spendbook Configuration");
        println!("=======================");
        println!("Base directory:   {}", paths.base_dir().display());
        println!("Data directory:   {}", paths.data_dir().display());
        println!("Exports directory: {}", paths.exports_dir().display());
        println!("Settings file:    {}", paths.settings_file().display());
        println!();
        println!("Settings:");
        println!("  Language:        {:?}", settings.language);
        println!("  Currency symbol: {}", settings.currency_symbol);
        println!("  Log level:       {}", settings.log_level);
        println!("  Fallback store:  {}", settings.backends.fallback);
        println!("  Record store:    {}", settings.backends.structured);
        println!("  Snapshot:        {}", settings.backends.snapshot);
        return Ok(ExitCode::SUCCESS);
    }

    let notifier = ConsoleNotifier;
    let mut ctx = CommandContext {
        tracker: ExpenseTracker::open(&paths, &settings)?,
        paths: &paths,
        settings: &settings,
        notifier: &notifier,
        today: Local::now().date_naive(),
    };

    let result = match command {
        Commands::Add(args) => handle_add_command(&mut ctx, args),
        Commands::Edit { id, fields } => handle_edit_command(&mut ctx, id, fields),
        Commands::Delete { id } => handle_delete_command(&mut ctx, id),
        Commands::List(args) => handle_list_command(&ctx, args),
        Commands::Budget(cmd) => handle_budget_command(&mut ctx, cmd),
        Commands::Report(cmd) => handle_report_command(&ctx, cmd),
        Commands::Export(cmd) => handle_export_command(&ctx, cmd),
        Commands::Import { file } => handle_import_command(&mut ctx, &file),
        Commands::Restore => handle_restore_command(&mut ctx),
        Commands::Clear { yes } => handle_clear_command(&mut ctx, yes),
        Commands::Config { .. } => Ok(()),
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Already announced to the user
        Err(e) if e.is_user_facing() => Ok(ExitCode::FAILURE),
        Err(e) => Err(e.into()),
    }
}
