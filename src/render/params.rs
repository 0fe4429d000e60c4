//! # Dither Parameters
//!
//! The full set of knobs for one dithering pass: which threshold matrix to
//! tile, and the two luminance cutoffs that bypass the matrix entirely.
//!
//! ```text
//! 0 ──────── black_cutoff ──────── white_cutoff ──────── 255
//! │  always black  │   matrix tested   │   always white   │
//! ```
//!
//! Both cutoffs are inclusive: a pixel whose luminance equals `black_cutoff`
//! is black, one equal to `white_cutoff` is white.

use serde::Serialize;

use super::matrix::ThresholdMatrix;
use crate::error::{DitherError, Result};

/// Pixels with alpha below this are treated as empty and never inked.
pub const ALPHA_CUTOFF: u8 = 5;

/// Default luminance at or below which a pixel is forced black.
pub const DEFAULT_BLACK_CUTOFF: u8 = 10;

/// Default luminance at or above which a pixel is forced white.
pub const DEFAULT_WHITE_CUTOFF: u8 = 170;

/// Validated parameters for [`dither`](super::dither::dither).
///
/// Constructed through [`DitherParameters::new`], which rejects
/// `black_cutoff >= white_cutoff`, so holding a value means it is usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DitherParameters {
    matrix: ThresholdMatrix,
    black_cutoff: u8,
    white_cutoff: u8,
}

impl DitherParameters {
    /// Validate and build a parameter set.
    ///
    /// ## Example
    ///
    /// ```
    /// use sprite_dither::render::{matrix::ThresholdMatrix, params::DitherParameters};
    ///
    /// let params = DitherParameters::new(ThresholdMatrix::bayer2(), 20, 200)?;
    /// assert_eq!(params.black_cutoff(), 20);
    ///
    /// assert!(DitherParameters::new(ThresholdMatrix::bayer2(), 200, 200).is_err());
    /// # Ok::<(), sprite_dither::DitherError>(())
    /// ```
    pub fn new(matrix: ThresholdMatrix, black_cutoff: u8, white_cutoff: u8) -> Result<Self> {
        if black_cutoff >= white_cutoff {
            return Err(DitherError::InvalidParameters(format!(
                "black cutoff ({black_cutoff}) must be below white cutoff ({white_cutoff})"
            )));
        }
        Ok(Self {
            matrix,
            black_cutoff,
            white_cutoff,
        })
    }

    #[inline]
    pub fn matrix(&self) -> &ThresholdMatrix {
        &self.matrix
    }

    #[inline]
    pub fn black_cutoff(&self) -> u8 {
        self.black_cutoff
    }

    #[inline]
    pub fn white_cutoff(&self) -> u8 {
        self.white_cutoff
    }
}

impl Default for DitherParameters {
    /// 4x4 Bayer matrix with cutoffs 10 and 170.
    fn default() -> Self {
        Self {
            matrix: ThresholdMatrix::bayer4(),
            black_cutoff: DEFAULT_BLACK_CUTOFF,
            white_cutoff: DEFAULT_WHITE_CUTOFF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = DitherParameters::default();
        assert_eq!(params.matrix(), &ThresholdMatrix::bayer4());
        assert_eq!(params.black_cutoff(), 10);
        assert_eq!(params.white_cutoff(), 170);
    }

    #[test]
    fn test_cutoff_order_enforced() {
        for (black, white) in [(170, 10), (100, 100), (255, 0)] {
            let err = DitherParameters::new(ThresholdMatrix::bayer4(), black, white).unwrap_err();
            assert!(
                matches!(err, DitherError::InvalidParameters(_)),
                "({}, {}) should be rejected",
                black,
                white
            );
        }
    }

    #[test]
    fn test_extreme_cutoffs_accepted() {
        let params = DitherParameters::new(ThresholdMatrix::bayer2(), 0, 255).unwrap();
        assert_eq!((params.black_cutoff(), params.white_cutoff()), (0, 255));
    }
}
