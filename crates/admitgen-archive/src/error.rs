//! Error types for archive packaging.

use thiserror::Error;

/// Result type for archive operations
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while building the batch archive.
///
/// Per-row render failures are not errors at this level; they are
/// collected in the batch outcome and the run continues.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Error writing the ZIP archive
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
