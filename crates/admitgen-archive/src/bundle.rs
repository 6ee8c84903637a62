//! The in-memory bundle of rendered cards.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::error::Result;

/// A collection of (filename, document) pairs with unique filenames,
/// built incrementally during a batch run and sealed once into a single
/// deflate-compressed ZIP byte sequence.
#[derive(Debug, Default)]
pub struct CardBundle {
    entries: Vec<(String, Vec<u8>)>,
    names: HashSet<String>,
}

impl CardBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in the bundle
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle holds no documents
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filenames currently in the bundle, in insertion order
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Add a document under `filename`.
    ///
    /// Two rows with the same name and roll would collide; instead of
    /// silently overwriting, the filename gets a numeric suffix before
    /// its extension (`_2`, `_3`, ...). Returns the name actually used.
    pub fn add(&mut self, filename: &str, document: Vec<u8>) -> String {
        let name = self.disambiguate(filename);
        self.names.insert(name.clone());
        self.entries.push((name.clone(), document));
        name
    }

    fn disambiguate(&self, filename: &str) -> String {
        if !self.names.contains(filename) {
            return filename.to_string();
        }
        let (stem, extension) = match filename.rfind('.') {
            Some(dot) => (&filename[..dot], &filename[dot..]),
            None => (filename, ""),
        };
        (2..)
            .map(|n| format!("{stem}_{n}{extension}"))
            .find(|candidate| !self.names.contains(candidate))
            .unwrap_or_else(|| filename.to_string()) // unreachable: the range is infinite
    }

    /// Seal the bundle into one ZIP byte sequence.
    ///
    /// Entries are written in sorted name order so the archive bytes do
    /// not depend on row order.
    pub fn seal(self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        let mut zip = ZipWriter::new(&mut buffer);
        // fixed timestamp keeps the archive bytes reproducible
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        let mut entries = self.entries;
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, document) in &entries {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(document)?;
        }
        zip.finish()?;

        Ok(buffer.into_inner())
    }
}
