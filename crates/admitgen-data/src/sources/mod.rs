//! Table source implementations.
//!
//! Adapters for the upload formats the batch path accepts (CSV and
//! Excel workbooks).

pub mod csv;
pub mod excel;

pub use csv::{CsvOptions, CsvSource};
pub use excel::ExcelSource;

use crate::error::Result;
use crate::table::Table;

/// A source that can produce one student table
pub trait TableSource {
    /// Read the whole table: the first row becomes the header row,
    /// everything after it the data rows
    fn read_table(&self) -> Result<Table>;
}
