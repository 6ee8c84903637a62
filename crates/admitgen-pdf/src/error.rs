//! Error types for PDF generation

use thiserror::Error;

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors that can occur while constructing the PDF document
#[derive(Debug, Error)]
pub enum PdfError {
    /// lopdf failed to encode or write the document
    #[error("PDF construction failed: {0}")]
    Document(#[from] lopdf::Error),

    /// IO error while writing the document buffer
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
