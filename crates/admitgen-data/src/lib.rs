//! # admitgen-data
//!
//! Tabular input for admitgen - load student lists from CSV or Excel
//! files and map their rows to [`admitgen_core::PersonRecord`]s.
//!
//! ## Features
//!
//! - **CSV support**: comma, semicolon or tab separated, via `csv`
//! - **Excel support**: `.xlsx`/`.xls` workbooks via `calamine`
//! - **Roster mapping**: tolerant header aliases and documented
//!   defaults for missing values
//!
//! ## Example
//!
//! ```rust,ignore
//! use admitgen_data::{load_table, roster};
//!
//! let table = load_table("students.csv")?;
//! println!("loaded {} students", table.len());
//! let records = roster::to_records(&table);
//! ```

pub mod error;
pub mod roster;
pub mod sources;
pub mod table;

// Re-exports
pub use error::{DataError, Result};
pub use sources::{CsvOptions, CsvSource, ExcelSource, TableSource};
pub use table::Table;

use std::path::Path;

/// Load a student table, picking the source from the file extension.
///
/// `.csv` goes through [`CsvSource`], `.xlsx`/`.xls` through
/// [`ExcelSource`]; anything else is an unsupported format. A malformed
/// or empty file surfaces as a [`DataError`] before any row is
/// processed.
pub fn load_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => CsvSource::new(path)?.read_table(),
        "xlsx" | "xls" => ExcelSource::new(path)?.read_table(),
        _ => Err(DataError::UnsupportedFormat(path.display().to_string())),
    }
}
