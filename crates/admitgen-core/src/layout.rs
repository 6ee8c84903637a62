//! Declarative card layout.
//!
//! The card is described as a flat list of absolute-positioned
//! [`Element`] primitives (rectangles, text spans, a photo box) in PDF
//! points with the origin at the top-left of an A4 page. Rendering
//! backends consume this list and are free to paint it with whatever
//! document library they wrap; the visual result must be the same.
//!
//! The coordinates transcribe the original fpdf card geometry
//! (millimetre grid converted to points): a full-page border, a
//! three-line centered header, bold label / plain value field lines,
//! a two-column subject table with a filled header row, and a centered
//! italic footer note.

use crate::record::PersonRecord;
use crate::schedule::SubjectSchedule;

/// Page width in points (A4)
pub const PAGE_WIDTH: f32 = 595.0;
/// Page height in points (A4)
pub const PAGE_HEIGHT: f32 = 842.0;

/// Border inset from every page edge
const FRAME_MARGIN: f32 = 14.0;
/// Left edge of content inside the frame
const CONTENT_X: f32 = FRAME_MARGIN + 14.0;
/// Height of one field or table line (10 mm)
const LINE_HEIGHT: f32 = 28.0;
/// Width of the bold label column (50 mm)
const LABEL_WIDTH: f32 = 142.0;
/// Subject column width (100 mm)
const SUBJECT_COL_WIDTH: f32 = 283.0;
/// Date column width (90 mm)
const DATE_COL_WIDTH: f32 = 255.0;
/// Photo box size (35 x 45 mm passport style)
const PHOTO_WIDTH: f32 = 99.0;
const PHOTO_HEIGHT: f32 = 128.0;

/// RGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Fill of the subject table header row
    pub const TABLE_HEADER: Color = Color {
        r: 0,
        g: 102,
        b: 204,
    };
}

/// Typeface style; backends map these onto a regular/bold/italic family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

/// Horizontal alignment of a text span within its box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Axis-aligned rectangle; `y` measures down from the top of the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A run of text inside a box; `y` is the top of the line box
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Box width used for centered alignment
    pub width: f32,
    pub size: f32,
    pub style: FontStyle,
    pub color: Color,
    pub align: Align,
}

/// One drawable primitive of the card
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A rectangle, stroked and/or filled
    Rect {
        rect: Rect,
        stroke: bool,
        fill: Option<Color>,
    },
    /// A text span
    Text(TextSpan),
    /// The photo placement box; the backend paints the decoded photo
    /// scaled into this rect
    Photo(Rect),
}

/// The fixed card layout with its configurable header strings.
///
/// Defaults reproduce the 2026 annual examination card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    /// Institution line, bold and large
    pub institution: String,
    /// Exam session line, italic
    pub session: String,
    /// Card title line, bold
    pub title: String,
    /// Closing disclaimer, italic and centered at the bottom
    pub footer: String,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            institution: "BOARD OF SECONDARY EDUCATION".to_string(),
            session: "ANNUAL EXAMINATION 2026".to_string(),
            title: "ADMIT CARD".to_string(),
            footer: "Note: This is a computer-generated admit card.".to_string(),
        }
    }
}

impl CardLayout {
    /// Lay out one card as a list of drawable elements.
    ///
    /// `with_photo` is decided by the backend after it has decoded the
    /// photo: an undecodable photo is laid out exactly like a missing
    /// one, so the two documents come out identical.
    pub fn elements(
        &self,
        person: &PersonRecord,
        schedule: &SubjectSchedule,
        with_photo: bool,
    ) -> Vec<Element> {
        let mut elements = Vec::new();
        let content_width = PAGE_WIDTH - 2.0 * FRAME_MARGIN;

        // Border around the whole printable area
        elements.push(Element::Rect {
            rect: Rect::new(
                FRAME_MARGIN,
                FRAME_MARGIN,
                content_width,
                PAGE_HEIGHT - 2.0 * FRAME_MARGIN,
            ),
            stroke: true,
            fill: None,
        });

        let mut y = FRAME_MARGIN + 14.0;

        // Three-line centered header
        y = self.push_header_line(&mut elements, y, &self.institution, 16.0, FontStyle::Bold, 28.0);
        y = self.push_header_line(&mut elements, y, &self.session, 11.0, FontStyle::Italic, 28.0);
        y = self.push_header_line(&mut elements, y, &self.title, 14.0, FontStyle::Bold, 34.0);
        y += 14.0;

        // Photo box in the upper-right region; the field block starts
        // below it when present
        if with_photo {
            let photo_rect = Rect::new(
                PAGE_WIDTH - FRAME_MARGIN - 14.0 - PHOTO_WIDTH,
                y,
                PHOTO_WIDTH,
                PHOTO_HEIGHT,
            );
            elements.push(Element::Rect {
                rect: photo_rect,
                stroke: true,
                fill: None,
            });
            elements.push(Element::Photo(photo_rect));
            y += PHOTO_HEIGHT + 10.0;
        }

        // Field lines in fixed order; optional fields that are not
        // applicable are omitted, present-but-empty values render as
        // empty lines
        let mut fields: Vec<(&str, &str)> = vec![("Student Name :", person.name.as_str())];
        if let Some(father) = &person.father_name {
            fields.push(("Father's Name :", father.as_str()));
        }
        if let Some(class) = &person.class_name {
            fields.push(("Class :", class.as_str()));
        }
        fields.push(("Roll Number :", person.roll_number.as_str()));
        fields.push(("Date of Birth :", person.date_of_birth.as_str()));
        fields.push(("Exam Centre :", person.exam_center.as_str()));

        for (label, value) in fields {
            elements.push(Element::Text(TextSpan {
                text: label.to_string(),
                x: CONTENT_X,
                y,
                width: LABEL_WIDTH,
                size: 12.0,
                style: FontStyle::Bold,
                color: Color::BLACK,
                align: Align::Left,
            }));
            elements.push(Element::Text(TextSpan {
                text: value.to_string(),
                x: CONTENT_X + LABEL_WIDTH,
                y,
                width: content_width - LABEL_WIDTH,
                size: 12.0,
                style: FontStyle::Regular,
                color: Color::BLACK,
                align: Align::Left,
            }));
            y += LINE_HEIGHT;
        }

        y += 22.0;

        // Subject table: filled header row, then one bordered row per
        // schedule entry in schedule order
        self.push_table_row(
            &mut elements,
            y,
            "Subject",
            "Date of Examination",
            FontStyle::Bold,
            Color::WHITE,
            Some(Color::TABLE_HEADER),
            Align::Center,
        );
        y += LINE_HEIGHT;

        for (subject, date) in schedule.entries() {
            self.push_table_row(
                &mut elements,
                y,
                subject,
                date,
                FontStyle::Regular,
                Color::BLACK,
                None,
                Align::Left,
            );
            y += LINE_HEIGHT;
        }

        // Footer note
        y += 28.0;
        elements.push(Element::Text(TextSpan {
            text: self.footer.clone(),
            x: FRAME_MARGIN,
            y,
            width: content_width,
            size: 9.0,
            style: FontStyle::Italic,
            color: Color::BLACK,
            align: Align::Center,
        }));

        elements
    }

    fn push_header_line(
        &self,
        elements: &mut Vec<Element>,
        y: f32,
        text: &str,
        size: f32,
        style: FontStyle,
        advance: f32,
    ) -> f32 {
        elements.push(Element::Text(TextSpan {
            text: text.to_string(),
            x: FRAME_MARGIN,
            y,
            width: PAGE_WIDTH - 2.0 * FRAME_MARGIN,
            size,
            style,
            color: Color::BLACK,
            align: Align::Center,
        }));
        y + advance
    }

    #[allow(clippy::too_many_arguments)]
    fn push_table_row(
        &self,
        elements: &mut Vec<Element>,
        y: f32,
        subject: &str,
        date: &str,
        style: FontStyle,
        text_color: Color,
        fill: Option<Color>,
        align: Align,
    ) {
        let cells = [
            (CONTENT_X, SUBJECT_COL_WIDTH, subject),
            (CONTENT_X + SUBJECT_COL_WIDTH, DATE_COL_WIDTH, date),
        ];
        for (x, width, text) in cells {
            elements.push(Element::Rect {
                rect: Rect::new(x, y, width, LINE_HEIGHT),
                stroke: true,
                fill,
            });
            let (text_x, text_width) = match align {
                Align::Left => (x + 8.0, width - 8.0),
                Align::Center => (x, width),
            };
            elements.push(Element::Text(TextSpan {
                text: text.to_string(),
                x: text_x,
                y: y + 3.0,
                width: text_width,
                size: 11.0,
                style,
                color: text_color,
                align,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_person() -> PersonRecord {
        PersonRecord::new(
            "Aarav Sharma",
            "456789",
            "15/05/2010",
            "Kendriya Vidyalaya, Delhi",
        )
    }

    fn texts(elements: &[Element]) -> Vec<&TextSpan> {
        elements
            .iter()
            .filter_map(|e| match e {
                Element::Text(span) => Some(span),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_contains_all_field_values() {
        let elements = CardLayout::default().elements(
            &sample_person(),
            &SubjectSchedule::annual_2026(),
            false,
        );
        let texts = texts(&elements);
        for expected in [
            "Aarav Sharma",
            "456789",
            "15/05/2010",
            "Kendriya Vidyalaya, Delhi",
        ] {
            assert!(
                texts.iter().any(|t| t.text == expected),
                "missing field value {expected:?}"
            );
        }
    }

    #[test]
    fn test_table_has_header_and_six_subject_rows() {
        let schedule = SubjectSchedule::annual_2026();
        let elements = CardLayout::default().elements(&sample_person(), &schedule, false);

        // 7 table rows x 2 bordered cells, plus the page frame
        let rects = elements
            .iter()
            .filter(|e| matches!(e, Element::Rect { .. }))
            .count();
        assert_eq!(rects, 1 + 7 * 2);

        // subject cells appear in schedule order
        let texts = texts(&elements);
        let subject_positions: Vec<_> = schedule
            .entries()
            .iter()
            .map(|(s, _)| texts.iter().position(|t| &t.text == s).unwrap())
            .collect();
        let mut sorted = subject_positions.clone();
        sorted.sort_unstable();
        assert_eq!(subject_positions, sorted);
    }

    #[test]
    fn test_header_row_is_filled() {
        let elements =
            CardLayout::default().elements(&sample_person(), &SubjectSchedule::annual_2026(), false);
        let filled = elements
            .iter()
            .filter(
                |e| matches!(e, Element::Rect { fill: Some(c), .. } if *c == Color::TABLE_HEADER),
            )
            .count();
        assert_eq!(filled, 2);
    }

    #[test]
    fn test_photo_box_only_when_requested() {
        let layout = CardLayout::default();
        let schedule = SubjectSchedule::annual_2026();
        let without = layout.elements(&sample_person(), &schedule, false);
        assert!(!without.iter().any(|e| matches!(e, Element::Photo(_))));

        let with = layout.elements(&sample_person(), &schedule, true);
        assert_eq!(
            with.iter()
                .filter(|e| matches!(e, Element::Photo(_)))
                .count(),
            1
        );
    }

    #[test]
    fn test_photo_shifts_field_block_down() {
        let layout = CardLayout::default();
        let schedule = SubjectSchedule::annual_2026();
        let name_y = |elements: &[Element]| {
            texts(elements)
                .iter()
                .find(|t| t.text == "Student Name :")
                .unwrap()
                .y
        };
        let without = layout.elements(&sample_person(), &schedule, false);
        let with = layout.elements(&sample_person(), &schedule, true);
        assert!(name_y(&with) > name_y(&without));
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let layout = CardLayout::default();
        let schedule = SubjectSchedule::annual_2026();
        let elements = layout.elements(&sample_person(), &schedule, false);
        assert!(!texts(&elements).iter().any(|t| t.text == "Father's Name :"));

        let person = sample_person().with_father_name("Rakesh Sharma").with_class("X");
        let elements = layout.elements(&person, &schedule, false);
        let texts = texts(&elements);
        assert!(texts.iter().any(|t| t.text == "Father's Name :"));
        assert!(texts.iter().any(|t| t.text == "Class :"));
    }

    #[test]
    fn test_present_but_empty_optional_renders_empty_line() {
        let person = sample_person().with_father_name("");
        let elements =
            CardLayout::default().elements(&person, &SubjectSchedule::annual_2026(), false);
        let texts = texts(&elements);
        let label_idx = texts
            .iter()
            .position(|t| t.text == "Father's Name :")
            .unwrap();
        assert_eq!(texts[label_idx + 1].text, "");
    }

    #[test]
    fn test_everything_fits_on_the_page() {
        let person = sample_person().with_father_name("R").with_class("X");
        let elements =
            CardLayout::default().elements(&person, &SubjectSchedule::annual_2026(), true);
        for element in &elements {
            let bottom = match element {
                Element::Rect { rect, .. } | Element::Photo(rect) => rect.y + rect.height,
                Element::Text(span) => span.y + span.size,
            };
            assert!(bottom <= PAGE_HEIGHT, "element extends past the page: {element:?}");
        }
    }
}
