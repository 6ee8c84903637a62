//! Integration tests for the PDF card renderer.

use std::io::Cursor;

use admitgen_core::{CardRenderer, PersonRecord, RenderWarning, SubjectSchedule};
use admitgen_pdf::PdfRenderer;

fn sample_person() -> PersonRecord {
    PersonRecord::new(
        "Aarav Sharma",
        "456789",
        "15/05/2010",
        "Kendriya Vidyalaya, Delhi",
    )
}

fn png_photo() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(24, 32, image::Rgb([200, 180, 160]));
    let mut buffer = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buffer, image::ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}

#[test]
fn render_produces_nonempty_pdf() {
    let card = admitgen_pdf::render_card(&sample_person(), &SubjectSchedule::annual_2026()).unwrap();
    assert!(!card.bytes.is_empty());
    assert!(card.bytes.starts_with(b"%PDF"));
    assert!(card.warnings.is_empty());
}

#[test]
fn render_contains_field_values_and_schedule() {
    let schedule = SubjectSchedule::annual_2026();
    let card = admitgen_pdf::render_card(&sample_person(), &schedule).unwrap();

    // The content stream is uncompressed, so all literals are visible
    let text = String::from_utf8_lossy(&card.bytes).into_owned();
    for expected in [
        "Aarav Sharma",
        "456789",
        "15/05/2010",
        "Kendriya Vidyalaya, Delhi",
        "ADMIT CARD",
        "Date of Examination",
        "This is a computer-generated admit card.",
    ] {
        assert!(text.contains(expected), "missing {expected:?}");
    }
    for (subject, date) in schedule.entries() {
        // "Sanskrit / Urdu" is escaped in the literal; check a stable prefix
        let subject_prefix: String = subject.chars().take_while(|c| c.is_alphanumeric()).collect();
        assert!(text.contains(&subject_prefix), "missing subject {subject:?}");
        assert!(text.contains(date.as_str()), "missing date {date:?}");
    }
}

#[test]
fn render_is_deterministic() {
    let renderer = PdfRenderer::new();
    let schedule = SubjectSchedule::annual_2026();
    let person = sample_person().with_photo(png_photo());

    let first = renderer.render(&person, &schedule).unwrap();
    let second = renderer.render(&person, &schedule).unwrap();
    assert_eq!(first.bytes, second.bytes);
}

#[test]
fn render_accepts_empty_fields() {
    let person = PersonRecord::new("", "", "", "");
    let card = admitgen_pdf::render_card(&person, &SubjectSchedule::annual_2026()).unwrap();
    assert!(card.bytes.starts_with(b"%PDF"));
}

#[test]
fn render_accepts_empty_schedule() {
    let card = admitgen_pdf::render_card(&sample_person(), &SubjectSchedule::new()).unwrap();
    assert!(card.bytes.starts_with(b"%PDF"));
}

#[test]
fn render_with_photo_embeds_image() {
    let person = sample_person().with_photo(png_photo());
    let card = admitgen_pdf::render_card(&person, &SubjectSchedule::annual_2026()).unwrap();
    assert!(card.warnings.is_empty());

    let text = String::from_utf8_lossy(&card.bytes).into_owned();
    assert!(text.contains("DCTDecode"));
    assert!(text.contains("XObject"));
}

#[test]
fn undecodable_photo_falls_back_to_no_photo_document() {
    let schedule = SubjectSchedule::annual_2026();
    let without_photo = admitgen_pdf::render_card(&sample_person(), &schedule).unwrap();

    let person = sample_person().with_photo(b"not an image at all".to_vec());
    let broken = admitgen_pdf::render_card(&person, &schedule).unwrap();

    assert_eq!(broken.bytes, without_photo.bytes);
    assert_eq!(broken.warnings.len(), 1);
    assert!(matches!(&broken.warnings[0], RenderWarning::PhotoDecode(_)));
}

#[test]
fn optional_fields_render_when_present() {
    let person = sample_person()
        .with_father_name("Rakesh Sharma")
        .with_class("X");
    let card = admitgen_pdf::render_card(&person, &SubjectSchedule::annual_2026()).unwrap();
    let text = String::from_utf8_lossy(&card.bytes).into_owned();
    assert!(text.contains("Rakesh Sharma"));
    assert!(text.contains("Class :"));
}
