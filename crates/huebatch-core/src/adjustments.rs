//! HSB adjustment pipeline.
//!
//! Applies brightness, saturation, and hue rotation to RGBA pixel data.
//!
//! ## Stage Order
//! 1. Brightness (multiplicative scale)
//! 2. Saturation (blend toward luma gray)
//! 3. Hue (per-pixel HSV round-trip)
//!
//! Each stage quantizes back to u8 before the next one runs, and the hue
//! stage always performs its RGB→HSV→RGB round-trip — even at a zero shift —
//! so identity parameters reproduce the input only to within ±1 per channel.
//! The alpha channel passes through every stage untouched.

use crate::colorspace::{hsv_to_rgb, luma, rgb_to_hsv};
use crate::decode::RgbaData;
use crate::HsbAdjustments;

/// Apply HSB adjustments to an image, returning a new image.
///
/// Pure function: the input is never mutated, the output is freshly
/// allocated with identical dimensions, and the same inputs always produce
/// the same output.
pub fn apply_adjustments(image: &RgbaData, adjustments: &HsbAdjustments) -> RgbaData {
    let mut out = image.clone();
    apply_hsb(&mut out.pixels, adjustments);
    out
}

/// Apply HSB adjustments to RGBA pixel data in place.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `adjustments` - The adjustment values to apply
pub fn apply_hsb(pixels: &mut [u8], adjustments: &HsbAdjustments) {
    // Normalized once per call so shifts 360 degrees apart are bit-identical.
    let hue_shift = adjustments.hue.rem_euclid(360.0) / 360.0;

    for chunk in pixels.chunks_exact_mut(4) {
        let (r, g, b) = scale_brightness(chunk[0], chunk[1], chunk[2], adjustments.brightness);
        let (r, g, b) = blend_saturation(r, g, b, adjustments.saturation);
        let (r, g, b) = rotate_hue(r, g, b, hue_shift);

        chunk[0] = r;
        chunk[1] = g;
        chunk[2] = b;
        // chunk[3] is alpha and is never written
    }
}

/// Scale each color channel by the brightness factor.
///
/// 1.0 leaves the pixel unchanged, 0.0 produces black, values above 1.0
/// brighten and clamp at white.
#[inline]
fn scale_brightness(r: u8, g: u8, b: u8, factor: f32) -> (u8, u8, u8) {
    if factor == 1.0 {
        return (r, g, b);
    }
    (
        (r as f32 * factor).clamp(0.0, 255.0).round() as u8,
        (g as f32 * factor).clamp(0.0, 255.0).round() as u8,
        (b as f32 * factor).clamp(0.0, 255.0).round() as u8,
    )
}

/// Blend each color channel toward the pixel's luma gray.
///
/// 1.0 leaves the pixel unchanged, 0.0 produces the fully desaturated gray,
/// values above 1.0 push channels away from gray and clamp.
#[inline]
fn blend_saturation(r: u8, g: u8, b: u8, factor: f32) -> (u8, u8, u8) {
    if factor == 1.0 {
        return (r, g, b);
    }
    let gray = luma(r as f32, g as f32, b as f32);
    (
        (gray + (r as f32 - gray) * factor).clamp(0.0, 255.0).round() as u8,
        (gray + (g as f32 - gray) * factor).clamp(0.0, 255.0).round() as u8,
        (gray + (b as f32 - gray) * factor).clamp(0.0, 255.0).round() as u8,
    )
}

/// Rotate the pixel's hue by `shift` (a fraction of a full turn in [0, 1)).
///
/// Converts to HSV, adds the shift modulo 1.0, and converts back. The
/// rescale to u8 truncates rather than rounds; exact output values at
/// sector boundaries depend on it.
#[inline]
fn rotate_hue(r: u8, g: u8, b: u8, shift: f32) -> (u8, u8, u8) {
    let (h, s, v) = rgb_to_hsv(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let h = (h + shift).rem_euclid(1.0);
    let (nr, ng, nb) = hsv_to_rgb(h, s, v);
    ((nr * 255.0) as u8, (ng * 255.0) as u8, (nb * 255.0) as u8)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
