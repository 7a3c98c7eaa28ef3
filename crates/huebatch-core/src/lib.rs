//! Huebatch Core - HSB image processing library
//!
//! This crate provides the core image processing functionality for Huebatch:
//! decoding PNG/JPEG files to RGBA pixel data, the hue/saturation/brightness
//! adjustment pipeline, batch application over image pairs, and encoding the
//! results back to disk formats.

pub mod adjustments;
pub mod colorspace;
pub mod decode;
pub mod encode;
pub mod pair;

pub use adjustments::{apply_adjustments, apply_hsb};
pub use decode::{decode_bytes, load_image, DecodeError, RgbaData};
pub use encode::{encode_image, EncodeError, OutputFormat};
pub use pair::{apply_to_all, ImagePair};

/// Hue/saturation/brightness adjustments for the transform pipeline.
///
/// The transform itself accepts any real values; the documented ranges are
/// the policy of the command-line surface, not of the math.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HsbAdjustments {
    /// Hue rotation in degrees, wraps modulo 360 (0 = unchanged)
    pub hue: f32,
    /// Saturation factor (1.0 = unchanged, 0.0 = grayscale, >1.0 = amplified)
    pub saturation: f32,
    /// Brightness factor (1.0 = unchanged, 0.0 = black, >1.0 = brighter)
    pub brightness: f32,
}

impl Default for HsbAdjustments {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 1.0,
            brightness: 1.0,
        }
    }
}

impl HsbAdjustments {
    /// Create a new HsbAdjustments with default (identity) values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their identity defaults.
    ///
    /// Note that identity parameters do not guarantee bit-identical output:
    /// the hue stage still runs its HSV round-trip, which can shift channels
    /// by one due to truncation.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}
