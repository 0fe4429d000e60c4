//! # Sprite Dither - Ordered Dithering for Sprite Frames
//!
//! Sprite Dither turns posed renders of a hand model into 1-bit looking
//! sprites for a low color depth display. It provides:
//!
//! - **Threshold matrices**: canonical 2x2 and 4x4 Bayer matrices, plus any
//!   custom rank permutation
//! - **Dithering**: alpha-aware ordered dithering with black/white cutoffs
//! - **Batch processing**: directory in, `_dithered` PNGs out, in stable
//!   name order for the sheet packer
//!
//! ## Quick Start
//!
//! ```no_run
//! use sprite_dither::{
//!     batch::{self, BatchOptions},
//!     render::{matrix::MatrixPreset, params::DitherParameters},
//! };
//!
//! let params = DitherParameters::new(MatrixPreset::Bayer4.matrix(), 10, 170)?;
//!
//! let report = batch::run_batch(&BatchOptions {
//!     input: "renders/index".into(),
//!     output: "dithered/index".into(),
//!     params,
//!     report: None,
//! })?;
//!
//! println!("{} frames written", report.processed.len());
//! # Ok::<(), sprite_dither::DitherError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`render`] | Matrices, parameters, luminance and the dither itself |
//! | [`batch`] | Directory driver and output naming |
//! | [`error`] | Error types |

pub mod batch;
pub mod error;
pub mod render;

// Re-exports for convenience
pub use error::DitherError;
pub use render::dither::{dither, dither_dynamic};
pub use render::matrix::{MatrixPreset, ThresholdMatrix};
pub use render::params::DitherParameters;
