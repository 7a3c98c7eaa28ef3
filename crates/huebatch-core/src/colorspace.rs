//! RGB/HSV conversions and luminance weighting.
//!
//! The conversions use the standard six-sector hexagonal HSV model over
//! normalized f32 channels in [0.0, 1.0], with hue in [0.0, 1.0). They are
//! the exact-semantics core of the hue rotation stage, so changes here
//! change output pixels.

/// ITU-R BT.601 coefficient for red in the grayscale blend.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green in the grayscale blend.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue in the grayscale blend.
pub const LUMA_B: f32 = 0.114;

/// Luminance-weighted gray value of a normalized RGB triple.
///
/// Used by the saturation stage as the desaturation target. The
/// coefficients are BT.601 to match the classic grayscale conversion.
#[inline]
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Convert normalized RGB to HSV.
///
/// Returns (hue, saturation, value) with hue in [0.0, 1.0). Achromatic
/// input (max == min) yields hue = 0 and saturation = 0.
#[inline]
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;

    if max == min {
        return (0.0, 0.0, v);
    }

    let s = (max - min) / max;
    let span = max - min;
    let rc = (max - r) / span;
    let gc = (max - g) / span;
    let bc = (max - b) / span;

    // Sector selection: the maximal channel decides which edge of the
    // hexagon the color sits on.
    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    ((h / 6.0).rem_euclid(1.0), s, v)
}

/// Convert HSV back to normalized RGB.
///
/// Hue is interpreted modulo 1.0; saturation and value are expected in
/// [0.0, 1.0]. Zero saturation short-circuits to gray.
#[inline]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (v, v, v);
    }

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
