//! # Threshold Matrices
//!
//! Ordered dithering compares each pixel against a threshold taken from a
//! small matrix that is tiled over the whole image. Every cell holds its rank
//! within the matrix, so a matrix with `n` cells contains each value
//! `0..n` exactly once. That permutation property gives a uniform spread of
//! thresholds across one tile.
//!
//! ## Canonical Matrices
//!
//! ```text
//!   2x2           4x4
//! ┌───┬───┐     ┌───┬───┬───┬───┐
//! │ 0 │ 2 │     │ 0 │ 8 │ 2 │10 │
//! ├───┼───┤     ├───┼───┼───┼───┤
//! │ 3 │ 1 │     │12 │ 4 │14 │ 6 │
//! └───┴───┘     ├───┼───┼───┼───┤
//!               │ 3 │11 │ 1 │ 9 │
//!               ├───┼───┼───┼───┤
//!               │15 │ 7 │13 │ 5 │
//!               └───┴───┴───┴───┘
//! ```
//!
//! A rank is mapped to an 8-bit threshold with
//! `threshold = (rank + 0.5) / size * 255`, so no threshold is ever exactly
//! 0 or 255.
//!
//! ## Usage Example
//!
//! ```
//! use sprite_dither::render::matrix::ThresholdMatrix;
//!
//! let bayer = ThresholdMatrix::bayer4();
//! assert_eq!(bayer.cell(1, 0), 8);
//! assert_eq!(bayer.cell(5, 4), 8); // tiles every 4 pixels
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{DitherError, Result};

/// Bayer 2x2 dithering matrix
pub const BAYER_2X2: [[u32; 2]; 2] = [[0, 2], [3, 1]];

/// Bayer 4x4 dithering matrix
pub const BAYER_4X4: [[u32; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// A rectangular grid of threshold ranks, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl ThresholdMatrix {
    /// Build a matrix from flat row-major cells.
    ///
    /// Fails with [`DitherError::InvalidParameters`] when either dimension is
    /// zero, when `cells.len() != rows * cols`, or when the cells are not a
    /// permutation of `0..rows * cols`.
    pub fn new(rows: usize, cols: usize, cells: Vec<u32>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(DitherError::InvalidParameters(
                "threshold matrix must not be empty".to_string(),
            ));
        }
        let size = rows.checked_mul(cols).ok_or_else(|| {
            DitherError::InvalidParameters(format!("threshold matrix {rows}x{cols} is too large"))
        })?;
        if cells.len() != size {
            return Err(DitherError::InvalidParameters(format!(
                "threshold matrix {}x{} needs {} cells, got {}",
                rows,
                cols,
                size,
                cells.len()
            )));
        }

        let mut seen = vec![false; size];
        for &value in &cells {
            let idx = value as usize;
            if idx >= size {
                return Err(DitherError::InvalidParameters(format!(
                    "threshold rank {value} out of range 0..{size}"
                )));
            }
            if seen[idx] {
                return Err(DitherError::InvalidParameters(format!(
                    "threshold rank {value} appears more than once"
                )));
            }
            seen[idx] = true;
        }

        Ok(Self { rows, cols, cells })
    }

    /// Build a matrix from nested rows.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(DitherError::InvalidParameters(format!(
                "threshold matrix is not rectangular: row {} has {} cells, expected {}",
                i,
                row.len(),
                width
            )));
        }
        Self::new(height, width, rows.into_iter().flatten().collect())
    }

    /// The canonical 2x2 Bayer matrix.
    pub fn bayer2() -> Self {
        Self::from_const(&BAYER_2X2)
    }

    /// The canonical 4x4 Bayer matrix.
    pub fn bayer4() -> Self {
        Self::from_const(&BAYER_4X4)
    }

    fn from_const<const R: usize, const C: usize>(data: &[[u32; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            cells: data.iter().flatten().copied().collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (`rows * cols`).
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Row-major cell ranks.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Rank of the tile cell covering pixel `(x, y)`.
    ///
    /// The matrix is anchored at `(0, 0)` and repeats every `cols` pixels
    /// horizontally and every `rows` pixels vertically.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> u32 {
        self.cells[(y % self.rows) * self.cols + (x % self.cols)]
    }

    /// Threshold on the 0-255 luminance scale for pixel `(x, y)`.
    ///
    /// ```text
    /// threshold = (cell(x, y) + 0.5) / size * 255
    /// ```
    #[inline]
    pub fn threshold_value(&self, x: usize, y: usize) -> f64 {
        (self.cell(x, y) as f64 + 0.5) / self.size() as f64 * 255.0
    }
}

/// Matrix choices exposed on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatrixPreset {
    /// 2x2 Bayer matrix (`--matrix 2`)
    Bayer2,
    /// 4x4 Bayer matrix (`--matrix 4`)
    #[default]
    Bayer4,
}

impl MatrixPreset {
    pub fn matrix(self) -> ThresholdMatrix {
        match self {
            MatrixPreset::Bayer2 => ThresholdMatrix::bayer2(),
            MatrixPreset::Bayer4 => ThresholdMatrix::bayer4(),
        }
    }

    /// Side length of the square matrix.
    pub fn dimension(self) -> usize {
        match self {
            MatrixPreset::Bayer2 => 2,
            MatrixPreset::Bayer4 => 4,
        }
    }
}

impl FromStr for MatrixPreset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "2" => Ok(MatrixPreset::Bayer2),
            "4" => Ok(MatrixPreset::Bayer4),
            other => Err(format!("unknown matrix '{other}', expected 2 or 4")),
        }
    }
}

impl fmt::Display for MatrixPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dimension())
    }
}
