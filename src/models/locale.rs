//! Localized labels
//!
//! Month names, CSV column headers and the short messages shown to the user
//! after an action. Gujarati is the default; English is available.

use chrono::Month;
use serde::{Deserialize, Serialize};

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "gu")]
    Gujarati,
    #[serde(rename = "en")]
    English,
}

const GUJARATI_MONTHS: [&str; 12] = [
    "જાન્યુઆરી",
    "ફેબ્રુઆરી",
    "માર્ચ",
    "એપ્રિલ",
    "મે",
    "જૂન",
    "જુલાઈ",
    "ઓગસ્ટ",
    "સપ્ટેમ્બર",
    "ઓક્ટોબર",
    "નવેમ્બર",
    "ડિસેમ્બર",
];

/// Outcome messages for user actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ExpenseAdded,
    ExpenseUpdated,
    ExpenseDeleted,
    BudgetSet,
    DataImported,
    DataExported,
    CsvExported,
    NothingToExport,
    SnapshotRestored,
    NoSnapshot,
    DataCleared,
    MissingFields,
    InvalidAmount,
    InvalidBudget,
    BadFileFormat,
    ExpenseNotFound,
}

impl Language {
    /// Localized month name
    pub fn month_name(&self, month: Month) -> &'static str {
        match self {
            Self::Gujarati => GUJARATI_MONTHS[month.number_from_month() as usize - 1],
            Self::English => month.name(),
        }
    }

    /// Header row for the CSV export
    pub fn csv_header(&self) -> [&'static str; 4] {
        match self {
            Self::Gujarati => ["તારીખ", "શ્રેણી", "રકમ", "વર્ણન"],
            Self::English => ["date", "category", "amount", "description"],
        }
    }

    /// Localized text for a user-facing message
    pub fn message(&self, message: Message) -> &'static str {
        match self {
            Self::Gujarati => gujarati(message),
            Self::English => english(message),
        }
    }
}

fn gujarati(message: Message) -> &'static str {
    match message {
        Message::ExpenseAdded => "ખર્ચ સફળતાપૂર્વક ઉમેરાયો!",
        Message::ExpenseUpdated => "ખર્ચ સફળતાપૂર્વક અપડેટ થયો!",
        Message::ExpenseDeleted => "ખર્ચ કાઢી નાખાયો!",
        Message::BudgetSet => "બજેટ સફળતાપૂર્વક સેટ થયો!",
        Message::DataImported => "ડેટા સફળતાપૂર્વક ઇમ્પોર્ટ થયો!",
        Message::DataExported => "ડેટા સફળતાપૂર્વક એક્સપોર્ટ થયો!",
        Message::CsvExported => "CSV ફાઇલ સફળતાપૂર્વક ડાઉનલોડ થઈ!",
        Message::NothingToExport => "કોઈ ખર્ચ નથી એક્સપોર્ટ કરવા માટે!",
        Message::SnapshotRestored => "બેકઅપથી ડેટા લોડ થયો!",
        Message::NoSnapshot => "કોઈ બેકઅપ મળ્યો નથી!",
        Message::DataCleared => "બધો ડેટા કાઢી નાખાયો!",
        Message::MissingFields => "કૃપા કરીને બધા જરૂરી ફીલ્ડ્સ ભરો!",
        Message::InvalidAmount => "કૃપા કરીને માન્ય રકમ દાખલ કરો!",
        Message::InvalidBudget => "કૃપા કરીને માન્ય બજેટ દાખલ કરો!",
        Message::BadFileFormat => "ફાઇલ ફોર્મેટ ખોટો છે!",
        Message::ExpenseNotFound => "ખર્ચ મળ્યો નથી!",
    }
}

fn english(message: Message) -> &'static str {
    match message {
        Message::ExpenseAdded => "Expense added.",
        Message::ExpenseUpdated => "Expense updated.",
        Message::ExpenseDeleted => "Expense deleted.",
        Message::BudgetSet => "Budget set.",
        Message::DataImported => "Data imported.",
        Message::DataExported => "Data exported.",
        Message::CsvExported => "CSV file written.",
        Message::NothingToExport => "There are no expenses to export.",
        Message::SnapshotRestored => "Data restored from backup.",
        Message::NoSnapshot => "No backup found.",
        Message::DataCleared => "All data cleared.",
        Message::MissingFields => "Please fill in all required fields.",
        Message::InvalidAmount => "Please enter a valid amount.",
        Message::InvalidBudget => "Please enter a valid budget.",
        Message::BadFileFormat => "The file format is invalid.",
        Message::ExpenseNotFound => "Expense not found.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(Language::English.month_name(Month::March), "March");
        assert_eq!(Language::Gujarati.month_name(Month::January), "જાન્યુઆરી");
        assert_eq!(Language::Gujarati.month_name(Month::December), "ડિસેમ્બર");
    }

    #[test]
    fn test_csv_headers() {
        assert_eq!(
            Language::Gujarati.csv_header(),
            ["તારીખ", "શ્રેણી", "રકમ", "વર્ણન"]
        );
        assert_eq!(Language::English.csv_header()[2], "amount");
    }

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::Gujarati).unwrap(), "\"gu\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
