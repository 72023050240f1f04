//! CSV export
//!
//! One line per record under a localized header. Fields are written as-is
//! with no quoting, so a comma or newline inside a description shifts the
//! columns of that row.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Language, DATE_FORMAT};

/// Write `expenses` as CSV to `writer`
pub fn write_csv<W: Write>(
    expenses: &[Expense],
    language: Language,
    writer: W,
) -> TrackerResult<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(writer);

    wtr.write_record(language.csv_header())
        .map_err(|e| TrackerError::Io(format!("Failed to write CSV header: {}", e)))?;

    for expense in expenses {
        let date = expense.date.format(DATE_FORMAT).to_string();
        let amount = expense.amount.to_string();
        wtr.write_record([
            date.as_str(),
            expense.category.as_str(),
            amount.as_str(),
            expense.description.as_str(),
        ])
        .map_err(|e| TrackerError::Io(format!("Failed to write CSV row: {}", e)))?;
    }

    wtr.flush()
        .map_err(|e| TrackerError::Io(format!("Failed to flush CSV: {}", e)))?;
    Ok(())
}

/// Render `expenses` as a CSV string
pub fn to_csv(expenses: &[Expense], language: Language) -> TrackerResult<String> {
    let mut buf = Vec::new();
    write_csv(expenses, language, &mut buf)?;
    String::from_utf8(buf).map_err(|e| TrackerError::Io(format!("CSV is not UTF-8: {}", e)))
}

/// File name for a CSV export made on `date`
pub fn csv_file_name(date: NaiveDate) -> String {
    format!("expenses_{}.csv", date.format("%Y-%m-%d"))
}
