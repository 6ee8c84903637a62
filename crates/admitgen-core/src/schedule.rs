//! The examination schedule: an ordered subject/date mapping.

use serde::Deserialize;

use crate::error::{CardError, Result};

/// Ordered mapping from subject name to examination date.
///
/// The schedule is fixed for a run and applied identically to every
/// person. Keys are unique; display order is insertion order, and the
/// card's subject table is painted in exactly that order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubjectSchedule {
    entries: Vec<(String, String)>,
}

/// One `[[subject]]` table in a schedule TOML file
#[derive(Debug, Deserialize)]
struct SubjectEntry {
    name: String,
    date: String,
}

/// Top-level schedule TOML file
#[derive(Debug, Deserialize)]
struct ScheduleFile {
    subject: Vec<SubjectEntry>,
}

impl SubjectSchedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in schedule for the 2026 annual examination
    pub fn annual_2026() -> Self {
        let mut schedule = Self::new();
        schedule.insert("Mathematics", "20 March 2026");
        schedule.insert("Science", "22 March 2026");
        schedule.insert("Social Science", "24 March 2026");
        schedule.insert("English", "26 March 2026");
        schedule.insert("Hindi", "28 March 2026");
        schedule.insert("Sanskrit / Urdu", "30 March 2026");
        schedule
    }

    /// Insert a subject.
    ///
    /// If the subject already exists its date is replaced and its
    /// position kept, so keys stay unique and order stays stable.
    pub fn insert(&mut self, subject: impl Into<String>, date: impl Into<String>) {
        let subject = subject.into();
        let date = date.into();
        match self.entries.iter_mut().find(|(s, _)| *s == subject) {
            Some(entry) => entry.1 = date,
            None => self.entries.push((subject, date)),
        }
    }

    /// Look up the date for a subject
    pub fn date_of(&self, subject: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| s == subject)
            .map(|(_, d)| d.as_str())
    }

    /// Entries in display order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of subjects
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no subjects
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a schedule from TOML.
    ///
    /// Expected format, one `[[subject]]` table per row of the card's
    /// subject table:
    ///
    /// ```toml
    /// [[subject]]
    /// name = "Mathematics"
    /// date = "20 March 2026"
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let file: ScheduleFile =
            toml::from_str(input).map_err(|e| CardError::Schedule(e.to_string()))?;

        if file.subject.is_empty() {
            return Err(CardError::Schedule("no subjects defined".to_string()));
        }

        let mut schedule = Self::new();
        for entry in file.subject {
            if schedule.date_of(&entry.name).is_some() {
                return Err(CardError::Schedule(format!(
                    "duplicate subject '{}'",
                    entry.name
                )));
            }
            schedule.insert(entry.name, entry.date);
        }
        Ok(schedule)
    }
}
