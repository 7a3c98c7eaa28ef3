//! PNG encoding for the batch writer.
//!
//! PNG is lossless and keeps the alpha channel, so processed images with
//! transparency survive a save/load cycle bit-for-bit.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use super::EncodeError;
use crate::decode::RgbaData;

/// Encode RGBA pixel data to PNG bytes, alpha included.
///
/// The caller is expected to have validated dimensions and buffer length
/// (see `encode_image`).
pub fn encode_png(image: &RgbaData) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
