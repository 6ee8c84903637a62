//! # admitgen-core
//!
//! Data model and layout description for the admitgen admit card
//! generator.
//!
//! This crate defines the types shared by every other admitgen crate:
//!
//! - [`PersonRecord`] - the per-person input fields
//! - [`SubjectSchedule`] - the ordered subject/date table applied to
//!   every person in a run
//! - [`CardLayout`] - a declarative, backend-independent description of
//!   the printable page (regions, fonts, fills)
//! - [`CardRenderer`] - the seam implemented by rendering backends
//!
//! The layout is expressed in absolute page coordinates so that any
//! backend consuming [`layout::Element`] values reproduces the same
//! visual result.
//!
//! ## Example
//!
//! ```
//! use admitgen_core::{CardLayout, PersonRecord, SubjectSchedule};
//!
//! let person = PersonRecord::new("Aarav Sharma", "456789", "15/05/2010", "Kendriya Vidyalaya, Delhi");
//! let schedule = SubjectSchedule::annual_2026();
//! let elements = CardLayout::default().elements(&person, &schedule, false);
//! assert!(!elements.is_empty());
//! ```

pub mod error;
pub mod layout;
pub mod record;
pub mod render;
pub mod schedule;

// Re-exports
pub use error::{CardError, Result};
pub use layout::CardLayout;
pub use record::PersonRecord;
pub use render::{CardRenderer, RenderWarning, RenderedCard};
pub use schedule::SubjectSchedule;

/// Crate version, shared by the CLI banner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
