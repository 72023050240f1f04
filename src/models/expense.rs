//! Expense model
//!
//! An expense is a dated, categorized positive amount with an optional
//! description. Drafts carry raw form input and are validated before they
//! become records; stored records are read back through a lenient shape that
//! tolerates corrupted amounts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::ids::ExpenseId;
use crate::error::{TrackerError, TrackerResult};

/// Date format used for every stored and exchanged date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// The day the expense occurred (not when it was entered)
    pub date: NaiveDate,

    /// Free-form category label
    pub category: String,

    /// Amount spent
    pub amount: f64,

    /// Optional notes
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Build a record from a validated draft
    pub fn from_draft(id: ExpenseId, draft: ValidDraft) -> Self {
        Self {
            id,
            date: draft.date,
            category: draft.category,
            amount: draft.amount,
            description: draft.description,
        }
    }

    /// Case-insensitive substring match on the description
    pub fn description_contains(&self, needle: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount
        )
    }
}

/// Raw input for creating or editing an expense
///
/// Every field is text, exactly as a form would submit it.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

/// A draft that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl ExpenseDraft {
    /// Create a draft with no description
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl ToString,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.to_string(),
            description: String::new(),
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check required fields and parse them
    pub fn validate(&self) -> TrackerResult<ValidDraft> {
        let date = self.date.trim();
        let category = self.category.trim();
        let amount = self.amount.trim();

        if date.is_empty() || category.is_empty() || amount.is_empty() {
            return Err(TrackerError::Validation(
                "Date, category and amount are required".into(),
            ));
        }

        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
            TrackerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", date))
        })?;

        let amount = parse_positive_amount(amount)?;

        Ok(ValidDraft {
            date,
            category: category.to_string(),
            amount,
            description: self.description.trim().to_string(),
        })
    }
}

/// Parse a user-entered amount that must be a finite number greater than zero
pub fn parse_positive_amount(s: &str) -> TrackerResult<f64> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(TrackerError::Validation(format!(
            "Invalid amount '{}', expected a number greater than zero",
            s.trim()
        ))),
    }
}

/// Coerce a stored amount to a finite number
///
/// Numbers pass through, text is read like a lenient float parse (leading
/// numeric prefix), anything else or anything non-finite becomes 0.
pub fn coerce_amount(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim();
    if let Ok(v) = s.parse::<f64>() {
        return Some(v);
    }

    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };
    let sign_len = |at: usize| usize::from(matches!(bytes.get(at), Some(b'+' | b'-')));

    let mut end = sign_len(0);
    let whole = digits_from(end);
    end += whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        end += 1 + fraction;
    }
    if whole + fraction == 0 {
        return None;
    }

    // An exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent_start = end + 1 + sign_len(end + 1);
        let exponent = digits_from(exponent_start);
        if exponent > 0 {
            end = exponent_start + exponent;
        }
    }
    s[..end].parse().ok()
}

/// Lenient shape of an expense as found in storage or an import document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExpense {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub date: Value,
    #[serde(default)]
    pub category: Value,
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub description: Value,
}

impl RawExpense {
    /// Turn into a record; `None` when the id or date can't be read
    pub fn into_expense(self) -> Option<Expense> {
        let id = match &self.id {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }?;

        let date = self
            .date
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())?;

        Some(Expense {
            id: ExpenseId::new(id),
            date,
            category: text_of(&self.category),
            amount: coerce_amount(&self.amount),
            description: text_of(&self.description),
        })
    }
}

/// `f` as an integer id, if it is whole and fits in an `i64`
fn whole_i64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (in_range && f.fract() == 0.0).then_some(f as i64)
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Decode a stored list of expenses, coercing amounts
///
/// The value must be an array; entries that can't be read as expenses are
/// skipped with a warning rather than failing the whole list.
pub fn decode_expense_list(value: Value) -> TrackerResult<Vec<Expense>> {
    let Value::Array(items) = value else {
        return Err(TrackerError::Format("Expected a list of expenses".into()));
    };

    let mut expenses = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let parsed = serde_json::from_value::<RawExpense>(item)
            .ok()
            .and_then(RawExpense::into_expense);
        match parsed {
            Some(expense) => expenses.push(expense),
            None => tracing::warn!(index, "skipping unreadable expense record"),
        }
    }
    Ok(expenses)
}
