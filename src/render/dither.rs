//! # Ordered Dithering
//!
//! Converts an RGBA frame into a 1-bit looking RGBA frame: every output pixel
//! is pure black or pure white, and alpha is copied from the input so the
//! sprite keeps its silhouette.
//!
//! ## Classification
//!
//! Each pixel at `(x, y)` is classified on its own, in this order:
//!
//! 1. `alpha < 5` → [`Ink::Transparent`] (black RGB, original alpha)
//! 2. `L <= black_cutoff` → [`Ink::Black`]
//! 3. `L >= white_cutoff` → [`Ink::White`]
//! 4. otherwise white if `L > threshold(x, y)`, else black
//!
//! where `L` is the [`luminance`] of the pixel and `threshold(x, y)` comes
//! from the tiled [`ThresholdMatrix`](super::matrix::ThresholdMatrix).
//!
//! ## Parallelism
//!
//! No pixel depends on any other, so rows are dithered in parallel with
//! `rayon`. Each worker reads the shared input and writes only its own output
//! row, which keeps the result identical to a sequential pass.
//!
//! ## Usage Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use sprite_dither::render::{dither::dither, params::DitherParameters};
//!
//! let frame = RgbaImage::from_pixel(4, 4, Rgba([128, 128, 128, 255]));
//! let out = dither(&frame, &DitherParameters::default())?;
//!
//! assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
//! assert_eq!(out.get_pixel(1, 0), &Rgba([0, 0, 0, 255]));
//! # Ok::<(), sprite_dither::DitherError>(())
//! ```

use image::{DynamicImage, RgbaImage};
use rayon::prelude::*;

use super::luma::luminance;
use super::params::{ALPHA_CUTOFF, DitherParameters};
use crate::error::{DitherError, Result};

/// Outcome of classifying a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Alpha too low to carry ink
    Transparent,
    /// No ink
    Black,
    /// Full ink
    White,
}

impl Ink {
    /// Value written to each of the R, G and B channels.
    #[inline]
    pub fn rgb(self) -> u8 {
        match self {
            Ink::Transparent | Ink::Black => 0,
            Ink::White => 255,
        }
    }
}

/// Classify one pixel given its luminance, alpha and position.
///
/// ```
/// use sprite_dither::render::{dither::{classify, Ink}, params::DitherParameters};
///
/// let params = DitherParameters::default();
/// assert_eq!(classify(200, 3, 0, 0, &params), Ink::Transparent);
/// assert_eq!(classify(10, 255, 0, 0, &params), Ink::Black);
/// assert_eq!(classify(170, 255, 0, 0, &params), Ink::White);
/// ```
#[inline]
pub fn classify(luma: u8, alpha: u8, x: usize, y: usize, params: &DitherParameters) -> Ink {
    if alpha < ALPHA_CUTOFF {
        return Ink::Transparent;
    }
    if luma <= params.black_cutoff() {
        return Ink::Black;
    }
    if luma >= params.white_cutoff() {
        return Ink::White;
    }
    if luma as f64 > params.matrix().threshold_value(x, y) {
        Ink::White
    } else {
        Ink::Black
    }
}

/// Dither an RGBA image into a new image of the same size.
///
/// Fails with [`DitherError::InvalidImage`] if the image has no pixels.
pub fn dither(image: &RgbaImage, params: &DitherParameters) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(DitherError::InvalidImage(format!(
            "image has zero dimension ({width}x{height})"
        )));
    }

    tracing::debug!(
        width,
        height,
        matrix_rows = params.matrix().rows(),
        matrix_cols = params.matrix().cols(),
        black_cutoff = params.black_cutoff(),
        white_cutoff = params.white_cutoff(),
        "dithering image"
    );

    let stride = width as usize * 4;
    let src = image.as_raw();
    let mut out = vec![0u8; src.len()];

    out.par_chunks_exact_mut(stride)
        .zip(src.par_chunks_exact(stride))
        .enumerate()
        .for_each(|(y, (dst_row, src_row))| {
            for (x, (dst, px)) in dst_row
                .chunks_exact_mut(4)
                .zip(src_row.chunks_exact(4))
                .enumerate()
            {
                let alpha = px[3];
                let ink = classify(luminance(px[0], px[1], px[2]), alpha, x, y, params);
                let v = ink.rgb();
                dst.copy_from_slice(&[v, v, v, alpha]);
            }
        });

    RgbaImage::from_raw(width, height, out).ok_or_else(|| {
        DitherError::InvalidImage(format!("pixel buffer does not fit {width}x{height}"))
    })
}

/// Dither any decoded image.
///
/// The image is converted to RGBA8 first; sources without an alpha channel
/// become fully opaque.
pub fn dither_dynamic(image: &DynamicImage, params: &DitherParameters) -> Result<RgbaImage> {
    dither(&image.to_rgba8(), params)
}

// ============================================================================
// TESTS
// ============================================================================
