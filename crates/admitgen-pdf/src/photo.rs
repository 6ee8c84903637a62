//! Photo decoding and normalization.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;

/// JPEG quality for the embedded photo
const JPEG_QUALITY: u8 = 85;

/// A photo decoded and re-encoded for PDF embedding (RGB JPEG, ready
/// for a DCTDecode image XObject)
#[derive(Debug, Clone)]
pub(crate) struct EncodedPhoto {
    pub jpeg: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode an uploaded photo blob and normalize it to RGB JPEG.
///
/// Accepts any format the `image` crate can sniff (PNG, JPEG, WebP);
/// alpha channels are flattened by the RGB conversion.
pub(crate) fn normalize(bytes: &[u8]) -> image::ImageResult<EncodedPhoto> {
    let decoded = image::load_from_memory(bytes)?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY).encode(
        rgb.as_raw(),
        width,
        height,
        ExtendedColorType::Rgb8,
    )?;

    Ok(EncodedPhoto {
        jpeg,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([120, 40, 200]));
        let mut buffer = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buffer, image::ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_normalize_png() {
        let photo = normalize(&png_bytes(12, 16)).unwrap();
        assert_eq!((photo.width, photo.height), (12, 16));
        // JPEG SOI marker
        assert_eq!(&photo.jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(normalize(b"definitely not an image").is_err());
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let bytes = png_bytes(8, 8);
        let a = normalize(&bytes).unwrap();
        let b = normalize(&bytes).unwrap();
        assert_eq!(a.jpeg, b.jpeg);
    }
}
