//! # Sprite Dither CLI
//!
//! Batch ordered dithering for rendered sprite frames.
//!
//! ## Usage
//!
//! ```bash
//! # Dither every PNG in renders/ with the 4x4 matrix and default cutoffs
//! sprite-dither --input renders --output dithered
//!
//! # Coarser 2x2 pattern, wider mid-tone band
//! sprite-dither --input renders --output dithered --matrix 2 --black-cutoff 5 --white-cutoff 200
//!
//! # Single frame, plus a JSON report of what was written
//! sprite-dither --input renders/pose_000.png --output dithered --report dithered/report.json
//!
//! # More detail on stderr
//! RUST_LOG=sprite_dither=debug sprite-dither --input renders --output dithered
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use sprite_dither::{
    DitherError, DitherParameters,
    batch::{self, BatchOptions},
    render::{
        matrix::MatrixPreset,
        params::{DEFAULT_BLACK_CUTOFF, DEFAULT_WHITE_CUTOFF},
    },
};

/// Sprite Dither - ordered dithering for RGBA sprite frames
#[derive(Parser, Debug)]
#[command(name = "sprite-dither")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input directory of PNG frames (or a single PNG file)
    #[arg(long, value_name = "DIR")]
    input: PathBuf,

    /// Output directory, created if absent
    #[arg(long, value_name = "DIR")]
    output: PathBuf,

    /// Threshold matrix size (2 or 4)
    #[arg(long, default_value = "4")]
    matrix: MatrixPreset,

    /// Luminance at or below which pixels are forced black (0-255)
    #[arg(long, default_value_t = DEFAULT_BLACK_CUTOFF)]
    black_cutoff: u8,

    /// Luminance at or above which pixels are forced white (0-255)
    #[arg(long, default_value_t = DEFAULT_WHITE_CUTOFF)]
    white_cutoff: u8,

    /// Write a JSON report of processed and skipped frames
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DitherError> {
    let cli = Cli::parse();

    // Parameters are checked before any file is touched
    let params = DitherParameters::new(cli.matrix.matrix(), cli.black_cutoff, cli.white_cutoff)?;

    let report = batch::run_batch(&BatchOptions {
        input: cli.input,
        output: cli.output,
        params,
        report: cli.report,
    })?;

    if !report.is_complete() {
        for skipped in &report.skipped {
            eprintln!("Skipped {}: {}", skipped.input.display(), skipped.reason);
        }
    }

    Ok(())
}
