//! Per-person input record and filename derivation.

use crate::error::{CardError, Result};

/// The input fields for one admit card.
///
/// All text fields are free-form strings and are inserted into the
/// document verbatim; nothing is parsed or reformatted. `father_name`
/// and `class_name` are `None` when the field is not applicable to the
/// input at hand (no such column, no such flag), in which case the
/// corresponding line is omitted from the card entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonRecord {
    /// Full name
    pub name: String,
    /// Roll number (kept as text, leading zeros preserved)
    pub roll_number: String,
    /// Date of birth, free-form
    pub date_of_birth: String,
    /// Examination center
    pub exam_center: String,
    /// Father's name, if the variant in use carries it
    pub father_name: Option<String>,
    /// Class, if the variant in use carries it
    pub class_name: Option<String>,
    /// Raw photo bytes (any decodable image format)
    pub photo: Option<Vec<u8>>,
}

impl PersonRecord {
    /// Create a record from the four required fields
    pub fn new(
        name: impl Into<String>,
        roll_number: impl Into<String>,
        date_of_birth: impl Into<String>,
        exam_center: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            roll_number: roll_number.into(),
            date_of_birth: date_of_birth.into(),
            exam_center: exam_center.into(),
            ..Default::default()
        }
    }

    /// Set the father's name field
    pub fn with_father_name(mut self, father_name: impl Into<String>) -> Self {
        self.father_name = Some(father_name.into());
        self
    }

    /// Set the class field
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Attach a photo
    pub fn with_photo(mut self, photo: Vec<u8>) -> Self {
        self.photo = Some(photo);
        self
    }

    /// Check that every required field is present.
    ///
    /// This is a user-input check for the single-card path; rendering
    /// itself accepts empty strings and never rejects a record.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CardError::MissingField("name"));
        }
        if self.roll_number.trim().is_empty() {
            return Err(CardError::MissingField("roll number"));
        }
        if self.date_of_birth.trim().is_empty() {
            return Err(CardError::MissingField("date of birth"));
        }
        if self.exam_center.trim().is_empty() {
            return Err(CardError::MissingField("exam center"));
        }
        Ok(())
    }

    /// Filename for a single downloaded card: `{name}_{roll}_Admit_Card.pdf`
    pub fn single_filename(&self) -> String {
        format!(
            "{}_{}_Admit_Card.pdf",
            sanitize(&self.name),
            sanitize(&self.roll_number)
        )
    }

    /// Filename for an entry inside a batch archive: `{name}_{roll}.pdf`
    pub fn bundle_filename(&self) -> String {
        format!("{}_{}.pdf", sanitize(&self.name), sanitize(&self.roll_number))
    }
}

/// Make a string safe for use as a filename component.
///
/// Every character outside `[A-Za-z0-9._-]` becomes an underscore, so
/// "Aarav Sharma" turns into "Aarav_Sharma".
pub fn sanitize(component: &str) -> String {
    component
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_spaces() {
        assert_eq!(sanitize("Aarav Sharma"), "Aarav_Sharma");
    }

    #[test]
    fn test_sanitize_keeps_safe_chars() {
        assert_eq!(sanitize("a-b_c.9"), "a-b_c.9");
    }

    #[test]
    fn test_sanitize_non_ascii() {
        assert_eq!(sanitize("Renée / Kumar"), "Ren_e___Kumar");
    }

    #[test]
    fn test_single_filename() {
        let person = PersonRecord::new("Aarav Sharma", "456789", "15/05/2010", "Delhi");
        assert_eq!(person.single_filename(), "Aarav_Sharma_456789_Admit_Card.pdf");
    }

    #[test]
    fn test_bundle_filename() {
        let person = PersonRecord::new("Aarav Sharma", "456789", "15/05/2010", "Delhi");
        assert_eq!(person.bundle_filename(), "Aarav_Sharma_456789.pdf");
    }

    #[test]
    fn test_validate_ok() {
        let person = PersonRecord::new("Aarav Sharma", "456789", "15/05/2010", "Delhi");
        assert!(person.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_name() {
        let person = PersonRecord::new("   ", "456789", "15/05/2010", "Delhi");
        assert!(matches!(
            person.validate(),
            Err(CardError::MissingField("name"))
        ));
    }

    #[test]
    fn test_validate_missing_center() {
        let person = PersonRecord::new("Aarav", "456789", "15/05/2010", "");
        assert!(matches!(
            person.validate(),
            Err(CardError::MissingField("exam center"))
        ));
    }

    #[test]
    fn test_builder_fields() {
        let person = PersonRecord::new("A", "1", "dob", "center")
            .with_father_name("B")
            .with_class("X")
            .with_photo(vec![1, 2, 3]);
        assert_eq!(person.father_name.as_deref(), Some("B"));
        assert_eq!(person.class_name.as_deref(), Some("X"));
        assert_eq!(person.photo.as_deref(), Some(&[1u8, 2, 3][..]));
    }
}
