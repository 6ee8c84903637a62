//! admitgen-pdf - PDF rendering backend
//!
//! Turns the declarative [`admitgen_core::CardLayout`] element list into
//! a single-page PDF using `lopdf`.
//!
//! # Architecture
//!
//! Rendering happens in two stages:
//!
//! 1. **Photo normalization** - the optional photo blob is decoded with
//!    the `image` crate and re-encoded as RGB JPEG for embedding. A blob
//!    that is not a decodable image is dropped with a warning; the card
//!    is laid out exactly as if no photo had been supplied.
//! 2. **Painting** - the layout elements are painted into a PDF content
//!    stream (base-14 Helvetica family, stroked/filled rectangles, an
//!    image XObject for the photo).
//!
//! The output embeds no timestamps, so identical inputs produce
//! identical bytes.
//!
//! # Example
//!
//! ```
//! use admitgen_core::{PersonRecord, SubjectSchedule};
//!
//! let person = PersonRecord::new("Aarav Sharma", "456789", "15/05/2010", "Delhi");
//! let card = admitgen_pdf::render_card(&person, &SubjectSchedule::annual_2026()).unwrap();
//! assert!(card.bytes.starts_with(b"%PDF"));
//! ```

mod backend;
mod error;
mod photo;
mod renderer;

pub use error::{PdfError, Result};
pub use renderer::PdfRenderer;

use admitgen_core::{CardRenderer, PersonRecord, RenderedCard, SubjectSchedule};

/// Convenience function to render one card with the default layout
pub fn render_card(
    person: &PersonRecord,
    schedule: &SubjectSchedule,
) -> admitgen_core::Result<RenderedCard> {
    PdfRenderer::new().render(person, schedule)
}
