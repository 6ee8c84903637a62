//! Error types shared across admitgen crates.

use thiserror::Error;

/// Result type for card operations
pub type Result<T> = std::result::Result<T, CardError>;

/// Errors that can occur while building or rendering a card
#[derive(Debug, Error)]
pub enum CardError {
    /// A required field was empty or absent
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    /// The rendering backend failed to produce a document
    #[error("Render failed: {0}")]
    Render(String),

    /// The schedule configuration could not be parsed
    #[error("Invalid schedule: {0}")]
    Schedule(String),
}
