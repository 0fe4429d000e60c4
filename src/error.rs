//! # Error Types
//!
//! This module defines error types used throughout the sprite-dither library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for dithering operations
#[derive(Debug, Error)]
pub enum DitherError {
    /// Malformed threshold matrix or cutoffs out of order
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Zero-sized image
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Filesystem error on a specific path
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decode or encode failure for a specific image file
    #[error("Image error on {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Input directory holds no recognized image files
    #[error("No PNG images found in {}", .dir.display())]
    NoInputs { dir: PathBuf },

    /// Batch report could not be serialized
    #[error("Failed to write report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DitherError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Image {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, DitherError>;
