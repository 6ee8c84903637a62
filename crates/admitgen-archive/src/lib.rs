//! # admitgen-archive
//!
//! Batch packaging for admitgen: render one card per table row and
//! bundle the results into a single deflate-compressed ZIP archive.
//!
//! The two halves mirror the batch pipeline:
//!
//! - [`CardBundle`] - incremental (filename, document) collection with
//!   unique names and a one-shot [`CardBundle::seal`]
//! - [`pack`] - the row driver: map, render, insert, and keep going
//!   when a single row fails
//!
//! ## Example
//!
//! ```rust,ignore
//! use admitgen_archive::pack;
//! use admitgen_core::SubjectSchedule;
//! use admitgen_pdf::PdfRenderer;
//!
//! let table = admitgen_data::load_table("students.csv")?;
//! let outcome = pack(&table, &SubjectSchedule::annual_2026(), &PdfRenderer::new())?;
//! std::fs::write("All_Admit_Cards_2026.zip", outcome.archive)?;
//! ```

pub mod bundle;
pub mod error;
pub mod packager;

// Re-exports
pub use bundle::CardBundle;
pub use error::{ArchiveError, Result};
pub use packager::{pack, pack_records, BatchOutcome, RowFailure, DEFAULT_ARCHIVE_NAME};
