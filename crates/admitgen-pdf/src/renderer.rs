//! The `CardRenderer` implementation backed by lopdf.

use admitgen_core::{
    CardError, CardLayout, CardRenderer, PersonRecord, RenderWarning, RenderedCard,
    SubjectSchedule,
};

use crate::{backend, photo};

/// PDF card renderer.
///
/// Stateless apart from its layout configuration, so one renderer can
/// serve a whole batch; every call is independent and deterministic.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    layout: CardLayout,
}

impl PdfRenderer {
    /// Create a renderer with the default card layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with a custom layout (header strings)
    pub fn with_layout(layout: CardLayout) -> Self {
        Self { layout }
    }
}

impl CardRenderer for PdfRenderer {
    fn render(
        &self,
        person: &PersonRecord,
        schedule: &SubjectSchedule,
    ) -> admitgen_core::Result<RenderedCard> {
        let mut warnings = Vec::new();

        // Decode before layout: an undecodable photo must yield the
        // same document as no photo at all
        let photo = match &person.photo {
            Some(bytes) => match photo::normalize(bytes) {
                Ok(photo) => Some(photo),
                Err(e) => {
                    log::warn!("photo for '{}' skipped: {e}", person.name);
                    warnings.push(RenderWarning::PhotoDecode(e.to_string()));
                    None
                }
            },
            None => None,
        };

        let elements = self.layout.elements(person, schedule, photo.is_some());
        let bytes = backend::paint(&elements, photo.as_ref())
            .map_err(|e| CardError::Render(e.to_string()))?;

        Ok(RenderedCard { bytes, warnings })
    }
}
