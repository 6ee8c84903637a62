//! End-to-end tests for table loading and roster mapping.

use std::io::Write;

use tempfile::TempDir;

use admitgen_data::{load_table, roster, DataError};

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn csv_to_records() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "students.csv",
        "Name,Roll,DOB,Center\n\
         Aarav Sharma,456789,15/05/2010,\"Kendriya Vidyalaya, Delhi\"\n\
         Diya Patel,456790,02/11/2010,KV Mumbai\n",
    );

    let table = load_table(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.preview(1).len(), 1);

    let records = roster::to_records(&table);
    assert_eq!(records[0].name, "Aarav Sharma");
    assert_eq!(records[0].exam_center, "Kendriya Vidyalaya, Delhi");
    assert_eq!(records[1].roll_number, "456790");
}

#[test]
fn csv_missing_optional_columns_default() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "students.csv", "Name,Roll\nAlice,1\n,2\n");

    let records = roster::to_records(&load_table(&path).unwrap());
    assert_eq!(records[0].date_of_birth, roster::DEFAULT_DOB);
    assert_eq!(records[0].exam_center, roster::DEFAULT_CENTER);
    assert_eq!(records[0].father_name, None);
    assert_eq!(records[1].name, roster::DEFAULT_NAME);
}

#[test]
fn unreadable_table_aborts_before_rows() {
    let dir = TempDir::new().unwrap();
    // An .xlsx that is not a zip archive at all
    let path = write_file(&dir, "students.xlsx", "this is not a workbook");

    assert!(matches!(
        load_table(&path),
        Err(DataError::WorkbookOpen(_))
    ));
}

#[test]
fn empty_csv_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "students.csv", "");
    assert!(matches!(load_table(&path), Err(DataError::EmptyTable(_))));
}
