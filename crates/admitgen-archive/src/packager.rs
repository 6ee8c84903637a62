//! The row-by-row batch driver.

use admitgen_core::{CardRenderer, PersonRecord, SubjectSchedule};
use admitgen_data::{roster, Table};

use crate::bundle::CardBundle;
use crate::error::Result;

/// Default filename for the sealed batch archive
pub const DEFAULT_ARCHIVE_NAME: &str = "All_Admit_Cards_2026.zip";

/// One row that could not be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// 1-based data row number
    pub row: usize,
    /// The name field of the failed record
    pub name: String,
    /// Why rendering failed
    pub reason: String,
}

/// The result of one batch run
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// The sealed ZIP archive
    pub archive: Vec<u8>,
    /// Documents packed into the archive
    pub packed: usize,
    /// Rows that were skipped, in row order
    pub failures: Vec<RowFailure>,
}

/// Render every row of a table and seal the cards into one archive.
///
/// Rows are processed independently: a row whose card cannot be
/// rendered is skipped and recorded, and the remaining rows are
/// unaffected. The call itself fails only if the archive cannot be
/// written.
pub fn pack(
    table: &Table,
    schedule: &SubjectSchedule,
    renderer: &impl CardRenderer,
) -> Result<BatchOutcome> {
    pack_records(&roster::to_records(table), schedule, renderer)
}

/// Like [`pack`], for records that are already mapped
pub fn pack_records(
    records: &[PersonRecord],
    schedule: &SubjectSchedule,
    renderer: &impl CardRenderer,
) -> Result<BatchOutcome> {
    let mut bundle = CardBundle::new();
    let mut failures = Vec::new();

    for (index, person) in records.iter().enumerate() {
        let row = index + 1;
        match renderer.render(person, schedule) {
            Ok(card) => {
                for warning in &card.warnings {
                    log::warn!("row {row} ({}): {warning}", person.name);
                }
                let filename = bundle.add(&person.bundle_filename(), card.bytes);
                log::debug!("row {row}: packed {filename}");
            }
            Err(e) => {
                log::warn!("row {row} ({}) skipped: {e}", person.name);
                failures.push(RowFailure {
                    row,
                    name: person.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let packed = bundle.len();
    Ok(BatchOutcome {
        archive: bundle.seal()?,
        packed,
        failures,
    })
}
