//! The rendering seam between the layout and its backends.

use std::fmt;

use crate::error::Result;
use crate::record::PersonRecord;
use crate::schedule::SubjectSchedule;

/// A non-fatal anomaly noticed while rendering a card.
///
/// Warnings never abort the document; the card is still produced and
/// the caller decides how to surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// The supplied photo could not be decoded; the card was produced
    /// without it
    PhotoDecode(String),
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::PhotoDecode(reason) => {
                write!(f, "photo skipped (not a decodable image): {reason}")
            }
        }
    }
}

/// One rendered, immutable admit card
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    /// The printable document as bytes
    pub bytes: Vec<u8>,
    /// Anomalies encountered while producing it
    pub warnings: Vec<RenderWarning>,
}

/// A backend that can turn a person plus a schedule into one printable
/// document.
///
/// Implementations must be deterministic: identical inputs (photo bytes
/// included) produce identical output, and rendering must be free of
/// side effects so batches can treat rows independently.
pub trait CardRenderer {
    /// Render one card
    fn render(&self, person: &PersonRecord, schedule: &SubjectSchedule) -> Result<RenderedCard>;
}
