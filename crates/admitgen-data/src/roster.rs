//! Mapping from table rows to person records.
//!
//! Columns are matched by name, case-insensitively, with a few tolerant
//! aliases per field. Required fields fall back to documented defaults
//! when the column is missing or the cell is empty; the optional fields
//! only exist on a card when their column exists in the table.

use admitgen_core::PersonRecord;

use crate::table::Table;

/// Default name when the Name column is missing or empty
pub const DEFAULT_NAME: &str = "Student";
/// Default roll number
pub const DEFAULT_ROLL: &str = "000000";
/// Default date of birth
pub const DEFAULT_DOB: &str = "N/A";
/// Default examination center
pub const DEFAULT_CENTER: &str = "N/A";

const NAME_ALIASES: &[&str] = &["name", "full name", "student name"];
const ROLL_ALIASES: &[&str] = &["roll", "roll number", "roll no", "roll no."];
const DOB_ALIASES: &[&str] = &["dob", "date of birth"];
const CENTER_ALIASES: &[&str] = &[
    "center",
    "centre",
    "exam center",
    "exam centre",
    "examination center",
];
const FATHER_ALIASES: &[&str] = &["father's name", "father name", "fathers name"];
const CLASS_ALIASES: &[&str] = &["class"];

/// Column positions of the known fields within one table
#[derive(Debug, Clone, Copy, Default)]
struct ColumnMap {
    name: Option<usize>,
    roll: Option<usize>,
    dob: Option<usize>,
    center: Option<usize>,
    father: Option<usize>,
    class: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &[String]) -> Self {
        Self {
            name: find_column(headers, NAME_ALIASES),
            roll: find_column(headers, ROLL_ALIASES),
            dob: find_column(headers, DOB_ALIASES),
            center: find_column(headers, CENTER_ALIASES),
            father: find_column(headers, FATHER_ALIASES),
            class: find_column(headers, CLASS_ALIASES),
        }
    }
}

fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| aliases.contains(&h.trim().to_lowercase().as_str()))
}

fn cell<'a>(row: &'a [String], index: Option<usize>) -> Option<&'a str> {
    index.and_then(|i| row.get(i)).map(|s| s.trim())
}

fn cell_or<'a>(row: &'a [String], index: Option<usize>, default: &'a str) -> &'a str {
    match cell(row, index) {
        Some(value) if !value.is_empty() => value,
        _ => default,
    }
}

/// Map one row to a record, applying defaults for absent values
fn to_record(row: &[String], columns: &ColumnMap) -> PersonRecord {
    let mut person = PersonRecord::new(
        cell_or(row, columns.name, DEFAULT_NAME),
        cell_or(row, columns.roll, DEFAULT_ROLL),
        cell_or(row, columns.dob, DEFAULT_DOB),
        cell_or(row, columns.center, DEFAULT_CENTER),
    );
    if columns.father.is_some() {
        person.father_name = Some(cell(row, columns.father).unwrap_or_default().to_string());
    }
    if columns.class.is_some() {
        person.class_name = Some(cell(row, columns.class).unwrap_or_default().to_string());
    }
    person
}

/// Map every row of a table to a person record, in table order.
///
/// This never fails: rows with missing data get the defaults, exactly
/// like the interactive defaults documented above.
pub fn to_records(table: &Table) -> Vec<PersonRecord> {
    let columns = ColumnMap::resolve(&table.headers);
    table.rows.iter().map(|row| to_record(row, &columns)).collect()
}
