//! Excel (XLSX/XLS) table source using calamine.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{DataError, Result};
use crate::sources::TableSource;
use crate::table::Table;

/// Excel workbook table source.
///
/// Reads the used range of one sheet (by default the first) and flattens
/// every cell to text, the way the CSV source does.
pub struct ExcelSource {
    /// Path to the workbook
    path: String,
    /// Sheet to read; `None` means the first sheet
    sheet: Option<String>,
}

impl ExcelSource {
    /// Create a new Excel source from a file path
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();

        if !path.as_ref().exists() {
            return Err(DataError::FileNotFound(path_str));
        }

        Ok(Self {
            path: path_str,
            sheet: None,
        })
    }

    /// Read a named sheet instead of the first one
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Convert a calamine cell to a string
    fn cell_to_string(cell: &Data) -> String {
        match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => {
                // Roll numbers load as floats; drop the pointless ".0"
                if f.fract() == 0.0 {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
            Data::Bool(b) => b.to_string(),
            Data::Error(e) => format!("#ERROR: {:?}", e),
            Data::DateTime(dt) => format!("{}", dt),
            Data::DateTimeIso(s) => s.clone(),
            Data::DurationIso(s) => s.clone(),
        }
    }
}

impl TableSource for ExcelSource {
    fn read_table(&self) -> Result<Table> {
        let mut workbook = open_workbook_auto(&self.path)
            .map_err(|e| DataError::WorkbookOpen(format!("{}: {}", self.path, e)))?;

        let sheet_name = match &self.sheet {
            Some(name) => name.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| DataError::SheetNotFound("no sheets in workbook".to_string()))?,
        };

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| DataError::SheetNotFound(format!("{}: {}", sheet_name, e)))?;

        let mut rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(Self::cell_to_string).collect())
            .collect();

        if rows.is_empty() {
            return Err(DataError::EmptyTable(self.path.clone()));
        }

        let headers = rows.remove(0);
        Ok(Table::new(headers, rows))
    }
}
