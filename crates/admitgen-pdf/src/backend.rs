//! lopdf painter for the card layout.
//!
//! Paints [`Element`] primitives into one A4 page. Fonts are the
//! base-14 Helvetica family (no embedding), the photo is placed as a
//! DCTDecode image XObject, and the content stream is left uncompressed
//! so the output is fully deterministic.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object};

use admitgen_core::layout::{
    Align, Color, Element, FontStyle, Rect, TextSpan, PAGE_HEIGHT, PAGE_WIDTH,
};

use crate::error::Result;
use crate::photo::EncodedPhoto;

/// Resource name of the embedded photo XObject
const PHOTO_NAME: &str = "Im1";

/// Paint the element list into a single-page PDF.
pub(crate) fn paint(elements: &[Element], photo: Option<&EncodedPhoto>) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let font_italic = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Oblique",
    });

    let mut operations = Vec::new();
    for element in elements {
        match element {
            Element::Rect { rect, stroke, fill } => {
                push_rect(&mut operations, rect, *stroke, *fill);
            }
            Element::Text(span) => push_text(&mut operations, span),
            Element::Photo(rect) => {
                if let Some(photo) = photo {
                    push_photo(&mut operations, rect, photo);
                }
            }
        }
    }

    let content = Content { operations };
    let content_id = doc.add_object(lopdf::Stream::new(dictionary! {}, content.encode()?));

    let mut resources = dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular,
            "F2" => font_bold,
            "F3" => font_italic,
        },
    };
    if let Some(photo) = photo {
        let image_id = doc.add_object(lopdf::Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => photo.width as i64,
                "Height" => photo.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            photo.jpeg.clone(),
        ));
        resources.set("XObject", dictionary! { PHOTO_NAME => image_id });
    }
    let resources_id = doc.add_object(resources);

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

fn push_rect(operations: &mut Vec<Operation>, rect: &Rect, stroke: bool, fill: Option<Color>) {
    // Flip to PDF's bottom-up y axis
    let y = PAGE_HEIGHT - rect.y - rect.height;
    if let Some(fill) = fill {
        operations.push(set_color("rg", fill));
    }
    operations.push(Operation::new(
        "re",
        vec![
            rect.x.into(),
            y.into(),
            rect.width.into(),
            rect.height.into(),
        ],
    ));
    let op = match (stroke, fill.is_some()) {
        (true, true) => "B",
        (true, false) => "S",
        _ => "f",
    };
    operations.push(Operation::new(op, vec![]));
}

fn push_text(operations: &mut Vec<Operation>, span: &TextSpan) {
    let font = match span.style {
        FontStyle::Regular => "F1",
        FontStyle::Bold => "F2",
        FontStyle::Italic => "F3",
    };
    let x = match span.align {
        Align::Left => span.x,
        Align::Center => {
            let width = approx_text_width(&span.text, span.size, span.style);
            span.x + ((span.width - width) / 2.0).max(0.0)
        }
    };
    let baseline = PAGE_HEIGHT - span.y - span.size;

    operations.push(set_color("rg", span.color));
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new("Tf", vec![font.into(), span.size.into()]));
    operations.push(Operation::new("Td", vec![x.into(), baseline.into()]));
    operations.push(Operation::new(
        "Tj",
        vec![Object::string_literal(span.text.as_str())],
    ));
    operations.push(Operation::new("ET", vec![]));
}

fn push_photo(operations: &mut Vec<Operation>, rect: &Rect, photo: &EncodedPhoto) {
    // Scale to fit the box, preserving aspect ratio, centered
    let scale = (rect.width / photo.width as f32).min(rect.height / photo.height as f32);
    let width = photo.width as f32 * scale;
    let height = photo.height as f32 * scale;
    let x = rect.x + (rect.width - width) / 2.0;
    let y = PAGE_HEIGHT - rect.y - rect.height + (rect.height - height) / 2.0;

    operations.push(Operation::new("q", vec![]));
    operations.push(Operation::new(
        "cm",
        vec![
            width.into(),
            0.into(),
            0.into(),
            height.into(),
            x.into(),
            y.into(),
        ],
    ));
    operations.push(Operation::new("Do", vec![PHOTO_NAME.into()]));
    operations.push(Operation::new("Q", vec![]));
}

fn set_color(op: &str, color: Color) -> Operation {
    Operation::new(
        op,
        vec![
            (color.r as f32 / 255.0).into(),
            (color.g as f32 / 255.0).into(),
            (color.b as f32 / 255.0).into(),
        ],
    )
}

/// Approximate Helvetica advance width, good enough for centering the
/// short header and footer lines
fn approx_text_width(text: &str, size: f32, style: FontStyle) -> f32 {
    let factor = match style {
        FontStyle::Bold => 0.52,
        FontStyle::Regular | FontStyle::Italic => 0.48,
    };
    text.chars().count() as f32 * size * factor
}
