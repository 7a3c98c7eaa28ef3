//! JPEG encoding for the batch writer.
//!
//! JPEG carries no transparency, so the alpha channel is dropped and the
//! image is written as opaque RGB.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use super::EncodeError;
use crate::decode::RgbaData;

/// Encode RGBA pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `image` - RGBA image data (alpha is stripped before encoding)
/// * `quality` - JPEG quality (1-100, clamped; 100 is highest)
///
/// The caller is expected to have validated dimensions and buffer length
/// (see `encode_image`).
pub fn encode_jpeg(image: &RgbaData, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let quality = quality.clamp(1, 100);
    let rgb = flatten_alpha(&image.pixels);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Drop the alpha byte from every RGBA pixel.
fn flatten_alpha(pixels: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(pixels.len() / 4 * 3);
    for chunk in pixels.chunks_exact(4) {
        rgb.extend_from_slice(&chunk[0..3]);
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================
