//! Data CLI commands
//!
//! Export to JSON or CSV, import an export document, restore from the
//! internal snapshot and wipe everything.

use chrono::Utc;
use clap::Subcommand;
use std::path::{Path, PathBuf};

use super::CommandContext;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{csv_file_name, json_file_name};
use crate::models::Message;
use crate::storage::write_atomic;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export records and budget as a re-importable JSON document
    Json {
        /// Output file path (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export records as CSV
    Csv {
        /// Output file path (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn write_export(path: &Path, contents: &str) -> TrackerResult<()> {
    write_atomic(path, contents.as_bytes())?;
    println!("{}", path.display());
    Ok(())
}

/// Handle an export command
pub fn handle_export_command(ctx: &CommandContext<'_>, cmd: ExportCommands) -> TrackerResult<()> {
    match cmd {
        ExportCommands::Json { output } => {
            let path = output
                .unwrap_or_else(|| ctx.paths.exports_dir().join(json_file_name(ctx.today)));
            let json = ctx.tracker.export_json(Utc::now())?;
            write_export(&path, &json)?;
            ctx.success(Message::DataExported);
        }

        ExportCommands::Csv { output } => {
            if ctx.tracker.records().is_empty() {
                ctx.info(Message::NothingToExport);
                return Ok(());
            }

            let path = output
                .unwrap_or_else(|| ctx.paths.exports_dir().join(csv_file_name(ctx.today)));
            let csv = ctx.tracker.export_csv(ctx.language())?;
            write_export(&path, &csv)?;
            ctx.success(Message::CsvExported);
        }
    }

    Ok(())
}

/// Replace all records with those in an export document
pub fn handle_import_command(ctx: &mut CommandContext<'_>, file: &Path) -> TrackerResult<()> {
    let text = std::fs::read_to_string(file).map_err(|e| {
        TrackerError::Io(format!("Failed to read {}: {}", file.display(), e))
    })?;

    let result = ctx.tracker.import_json(&text);
    let count = ctx.check(result, Message::BadFileFormat)?;

    ctx.success(Message::DataImported);
    println!("{} expense(s)", count);
    Ok(())
}

/// Restore the whole state from the internal snapshot
pub fn handle_restore_command(ctx: &mut CommandContext<'_>) -> TrackerResult<()> {
    let result = ctx.tracker.restore_snapshot();
    match ctx.check(result, Message::BadFileFormat)? {
        Some(count) => {
            ctx.success(Message::SnapshotRestored);
            println!("{} expense(s)", count);
        }
        None => ctx.info(Message::NoSnapshot),
    }
    Ok(())
}

/// Remove every record, the budget and the snapshot
pub fn handle_clear_command(ctx: &mut CommandContext<'_>, confirmed: bool) -> TrackerResult<()> {
    if !confirmed {
        println!("This deletes every expense, the budget and the backup.");
        println!("Run again with --yes to confirm.");
        return Ok(());
    }

    ctx.tracker.clear_all();
    ctx.success(Message::DataCleared);
    Ok(())
}
