//! # Luminance
//!
//! Grayscale conversion from RGB. Alpha does not take part; it is carried
//! through the dither unchanged.
//!
//! ```text
//! L = round(0.2989 R + 0.5870 G + 0.1140 B)
//! ```
//!
//! The weights match the common luma grayscale conversion so that the
//! default cutoffs (10 and 170) land on the same pixels as the frames they
//! were tuned against.

const R_WEIGHT: f64 = 0.2989;
const G_WEIGHT: f64 = 0.5870;
const B_WEIGHT: f64 = 0.1140;

/// Luminance of an RGB triple on the 0-255 scale.
///
/// ```
/// use sprite_dither::render::luma::luminance;
///
/// assert_eq!(luminance(0, 0, 0), 0);
/// assert_eq!(luminance(255, 255, 255), 255);
/// assert_eq!(luminance(128, 128, 128), 128);
/// ```
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let l = R_WEIGHT * r as f64 + G_WEIGHT * g as f64 + B_WEIGHT * b as f64;
    l.round().clamp(0.0, 255.0) as u8
}
