//! Image encoding pipeline for Huebatch.
//!
//! This module provides functionality for:
//! - Encoding RGBA pixel data to PNG (alpha preserved)
//! - Encoding RGBA pixel data to JPEG (alpha flattened, configurable quality)
//!
//! The output format follows the source file's extension, so a batch run
//! writes each image back in the format it was read from.

mod jpeg;
mod png;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

use thiserror::Error;

use crate::decode::RgbaData;

/// Errors that can occur during image encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Output formats the batch writer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Pick the format matching a file name's extension.
    ///
    /// Matching is case-sensitive, mirroring the input scan: `.png` is PNG,
    /// `.jpg` / `.jpeg` are JPEG, anything else is unsupported.
    pub fn for_file_name(name: &str) -> Option<Self> {
        if name.ends_with(".png") {
            Some(Self::Png)
        } else if name.ends_with(".jpg") || name.ends_with(".jpeg") {
            Some(Self::Jpeg)
        } else {
            None
        }
    }

    /// Whether the format can carry an alpha channel.
    pub fn supports_alpha(self) -> bool {
        matches!(self, Self::Png)
    }
}

/// Encode an image to the given format.
///
/// PNG keeps the alpha channel. JPEG does not support transparency, so the
/// alpha channel is stripped before encoding; `jpeg_quality` is clamped to
/// 1-100 and ignored for PNG.
pub fn encode_image(
    image: &RgbaData,
    format: OutputFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;
    match format {
        OutputFormat::Png => png::encode_png(image),
        OutputFormat::Jpeg => jpeg::encode_jpeg(image, jpeg_quality),
    }
}

fn validate(image: &RgbaData) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected = (image.width as usize) * (image.height as usize) * 4;
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    Ok(())
}
