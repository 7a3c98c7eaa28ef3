//! File and in-memory decoding with EXIF orientation handling.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use exif::{In, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, RgbaData};

/// Load and decode an image file into RGBA pixel data.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be read,
/// `DecodeError::InvalidFormat` if its bytes are not a recognized image
/// format, and `DecodeError::Corrupted` if decoding fails partway.
pub fn load_image(path: &Path) -> Result<RgbaData, DecodeError> {
    let bytes = fs::read(path).map_err(|e| DecodeError::Io(e.to_string()))?;
    decode_bytes(&bytes)
}

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// The result is always RGBA; images without an alpha channel decode with
/// alpha = 255 everywhere.
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbaData, DecodeError> {
    // Orientation comes from the EXIF container, which must be read before
    // the pixel data is decoded.
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    let oriented = orient(img, orientation);
    Ok(RgbaData::from_rgba_image(oriented.into_rgba8()))
}

/// Read the EXIF orientation tag value (1-8).
///
/// Returns 1 (normal) when the container has no EXIF data or the tag is
/// missing, which covers PNG input entirely.
fn extract_orientation(bytes: &[u8]) -> u32 {
    let mut cursor = Cursor::new(bytes);
    match exif::Reader::new().read_from_container(&mut cursor) {
        Ok(data) => data
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .unwrap_or(1),
        Err(_) => 1,
    }
}

/// Apply the transformation named by an EXIF orientation tag value.
///
/// Unknown values are treated as 1 (no transformation).
fn orient(img: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        _ => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(img: &image::RgbaImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn jpeg_bytes(img: &image::RgbImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Jpeg).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png_round_trips_pixels() {
        // PNG is lossless, so RGBA pixels including alpha come back exactly.
        let pixels = vec![
            255, 0, 0, 255, //
            0, 255, 0, 128, //
            0, 0, 255, 0, //
            40, 50, 60, 70,
        ];
        let img = image::RgbaImage::from_raw(2, 2, pixels.clone()).unwrap();
        let decoded = decode_bytes(&png_bytes(&img)).unwrap();

        assert_eq!(decoded.width, 2);
        assert_eq!(decoded.height, 2);
        assert_eq!(decoded.pixels, pixels);
    }

    #[test]
    fn test_decode_jpeg_fills_opaque_alpha() {
        let img = image::RgbImage::from_pixel(3, 2, image::Rgb([120, 80, 40]));
        let decoded = decode_bytes(&jpeg_bytes(&img)).unwrap();

        assert_eq!(decoded.width, 3);
        assert_eq!(decoded.height, 2);
        assert!(decoded.pixels.iter().skip(3).step_by(4).all(|&a| a == 255));
    }

    #[test]
    fn test_decode_unrecognized_bytes() {
        let result = decode_bytes(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        let result = decode_bytes(&[]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_truncated_png() {
        let img = image::RgbaImage::from_pixel(8, 8, image::Rgba([1, 2, 3, 4]));
        let bytes = png_bytes(&img);
        // Keep the magic so the format is recognized, then cut the data off.
        let result = decode_bytes(&bytes[0..24]);
        assert!(matches!(result, Err(DecodeError::Corrupted(_))));
    }

    #[test]
    fn test_load_image_missing_file() {
        let result = load_image(Path::new("/nonexistent/photo.png"));
        assert!(matches!(result, Err(DecodeError::Io(_))));
    }

    #[test]
    fn test_orient_rotate90_swaps_dimensions() {
        let pixels = vec![
            255, 0, 0, 255, // red, left
            0, 255, 0, 255, // green, right
        ];
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_raw(2, 1, pixels).unwrap());
        let result = orient(img, 6).into_rgba8();
        assert_eq!(result.dimensions(), (1, 2));
    }

    #[test]
    fn test_orient_rotate180_reverses_pixels() {
        let pixels = vec![
            255, 0, 0, 255, //
            0, 255, 0, 255,
        ];
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_raw(2, 1, pixels).unwrap());
        let result = orient(img, 3).into_rgba8();
        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0, 255]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_orient_unknown_value_is_noop() {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            2,
            1,
            image::Rgba([9, 9, 9, 9]),
        ));
        let result = orient(img.clone(), 99).into_rgba8();
        assert_eq!(result, img.into_rgba8());
    }

    #[test]
    fn test_extract_orientation_without_exif() {
        let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 255]));
        assert_eq!(extract_orientation(&png_bytes(&img)), 1);
        assert_eq!(extract_orientation(&[0x01, 0x02]), 1);
    }
}
