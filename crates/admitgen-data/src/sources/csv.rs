//! CSV table source.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{DataError, Result};
use crate::sources::TableSource;
use crate::table::Table;

/// Options for CSV parsing
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether to trim whitespace from fields
    pub trim: bool,
    /// Whether to allow rows with differing column counts
    pub flexible: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            trim: true,
            flexible: true,
        }
    }
}

impl CsvOptions {
    /// Options for tab-separated values (TSV)
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Default::default()
        }
    }

    /// Options for semicolon-separated values (common in European locales)
    pub fn semicolon() -> Self {
        Self {
            delimiter: b';',
            ..Default::default()
        }
    }
}

/// CSV file table source
pub struct CsvSource {
    /// Path to the CSV file
    path: String,
    /// Parsing options
    options: CsvOptions,
}

impl CsvSource {
    /// Create a new CSV source from a file path
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(path, CsvOptions::default())
    }

    /// Create a new CSV source with custom options
    pub fn with_options(path: impl AsRef<Path>, options: CsvOptions) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();

        if !path.as_ref().exists() {
            return Err(DataError::FileNotFound(path_str));
        }

        Ok(Self {
            path: path_str,
            options,
        })
    }
}

impl TableSource for CsvSource {
    fn read_table(&self) -> Result<Table> {
        let file = File::open(&self.path).map_err(DataError::Io)?;
        let reader = BufReader::new(file);

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .quote(self.options.quote)
            .has_headers(false) // We handle the header row ourselves
            .trim(if self.options.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .flexible(self.options.flexible)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        if rows.is_empty() {
            return Err(DataError::EmptyTable(self.path.clone()));
        }

        let headers = rows.remove(0);
        Ok(Table::new(headers, rows))
    }
}
