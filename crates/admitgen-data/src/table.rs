//! The in-memory tabular dataset.

/// A loaded student table: one header row plus data rows.
///
/// Cells are plain strings; any typing the source format had (Excel
/// numbers, dates) is flattened to text on load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Column headers, as found in the source
    pub headers: Vec<String>,
    /// Data rows; row lengths may differ from the header count
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` data rows, for display before a batch run
    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(n)]
    }
}
