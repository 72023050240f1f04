//! Import/export codec for Spendbook
//!
//! - JSON: the full state (records + budget), portable and re-importable
//! - CSV: a flattened, spreadsheet-friendly record list (export only)

pub mod csv;
pub mod json;

pub use self::csv::{csv_file_name, to_csv, write_csv};
pub use self::json::{
    from_json, json_file_name, to_json, ExportDocument, ImportedState, EXPORT_VERSION,
};
