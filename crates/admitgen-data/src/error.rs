//! Error types for tabular input.

use thiserror::Error;

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading a student table
#[derive(Debug, Error)]
pub enum DataError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The file extension is not a supported table format
    #[error("Unsupported table format: {0} (expected .csv, .xlsx or .xls)")]
    UnsupportedFormat(String),

    /// Failed to open workbook
    #[error("Failed to open workbook: {0}")]
    WorkbookOpen(String),

    /// Sheet not found in workbook
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// The table has no header row
    #[error("Table is empty: {0}")]
    EmptyTable(String),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(String),

    /// Calamine error
    #[error("Excel error: {0}")]
    Calamine(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Csv(err.to_string())
    }
}

impl From<calamine::Error> for DataError {
    fn from(err: calamine::Error) -> Self {
        DataError::Calamine(err.to_string())
    }
}

impl From<calamine::XlsxError> for DataError {
    fn from(err: calamine::XlsxError) -> Self {
        DataError::Calamine(err.to_string())
    }
}
