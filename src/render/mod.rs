//! # Rendering Module
//!
//! The dithering engine that turns rendered hand frames into 1-bit sprites.
//!
//! ## Modules
//!
//! - [`matrix`]: Threshold matrices and the canonical 2x2/4x4 Bayer presets
//! - [`params`]: Validated matrix + cutoff parameter sets
//! - [`luma`]: RGB to luminance conversion
//! - [`dither`]: Per-pixel classification and the image-level dither
//!
//! ## Usage Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use sprite_dither::render::{dither, matrix::MatrixPreset, params::DitherParameters};
//!
//! let params = DitherParameters::new(MatrixPreset::Bayer2.matrix(), 10, 170)?;
//! let frame = RgbaImage::from_pixel(64, 64, Rgba([90, 60, 40, 255]));
//!
//! let sprite = dither::dither(&frame, &params)?;
//! assert_eq!(sprite.dimensions(), (64, 64));
//! # Ok::<(), sprite_dither::DitherError>(())
//! ```

pub mod dither;
pub mod luma;
pub mod matrix;
pub mod params;
