//! JSON export and import
//!
//! The portable document holds every record, the budget, when it was made
//! and a format version. The same document, base64-encoded, is the internal
//! snapshot.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{coerce_amount, decode_expense_list, Expense, TrackerState};

/// Current document format version
pub const EXPORT_VERSION: &str = "1.0";

/// Full export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// All records
    pub expenses: Vec<Expense>,

    /// Monthly budget
    pub budget: f64,

    /// When the document was produced
    pub timestamp: DateTime<Utc>,

    /// Format version
    pub version: String,
}

impl ExportDocument {
    /// Build a document for `state` stamped with `exported_at`
    pub fn new(state: &TrackerState, exported_at: DateTime<Utc>) -> Self {
        Self {
            expenses: state.expenses.clone(),
            budget: state.budget,
            timestamp: exported_at,
            version: EXPORT_VERSION.to_string(),
        }
    }
}

/// What an import document yielded
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedState {
    /// Records to replace the current collection with
    pub expenses: Vec<Expense>,

    /// Budget, when the document carried a usable one
    pub budget: Option<f64>,

    /// Document timestamp, when present and readable
    pub timestamp: Option<DateTime<Utc>>,
}

/// Serialize `state` to a pretty-printed export document
pub fn to_json(state: &TrackerState, exported_at: DateTime<Utc>) -> TrackerResult<String> {
    serde_json::to_string_pretty(&ExportDocument::new(state, exported_at))
        .map_err(|e| TrackerError::Json(format!("Failed to serialize export: {}", e)))
}

/// Parse an export document
///
/// The record list (key `expenses`, or `records`) must be an array. The
/// budget is taken when it is a finite, non-negative number or numeric text;
/// otherwise it is reported as absent so the caller keeps its current one.
pub fn from_json(text: &str) -> TrackerResult<ImportedState> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| TrackerError::Format(format!("Not a JSON document: {}", e)))?;

    let Value::Object(mut doc) = value else {
        return Err(TrackerError::Format("Expected a JSON object".into()));
    };

    let records = doc
        .remove("expenses")
        .or_else(|| doc.remove("records"))
        .ok_or_else(|| TrackerError::Format("Document has no expense list".into()))?;

    if !records.is_array() {
        return Err(TrackerError::Format("Expense list is not an array".into()));
    }
    let expenses = decode_expense_list(records)?;

    let budget = doc.get("budget").and_then(budget_from_value);

    let timestamp = doc
        .get("timestamp")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc));

    Ok(ImportedState {
        expenses,
        budget,
        timestamp,
    })
}

fn budget_from_value(value: &Value) -> Option<f64> {
    let readable = match value {
        Value::Number(_) => true,
        Value::String(s) => s.trim().parse::<f64>().is_ok(),
        _ => false,
    };
    if !readable {
        return None;
    }
    Some(coerce_amount(value)).filter(|b| *b >= 0.0)
}

/// File name for a full export made on `date`
pub fn json_file_name(date: NaiveDate) -> String {
    format!("expense_tracker_backup_{}.json", date.format("%Y-%m-%d"))
}
