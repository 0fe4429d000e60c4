//! # Batch Driver
//!
//! Runs the dither over a directory of rendered frames and writes one
//! dithered PNG per input into an output directory.
//!
//! ## Ordering
//!
//! Files are processed in lexicographic file-name order. The sheet packer
//! downstream assigns grid cells by sorted name, so output names keep the
//! input name with a `_dithered` suffix before the extension:
//!
//! ```text
//! frames/pose_000.png  →  out/pose_000_dithered.png
//! frames/pose_001.png  →  out/pose_001_dithered.png
//! frames/pose_001.json    (left alone)
//! ```
//!
//! ## Failure Policy
//!
//! | Failure | Effect |
//! |---------|--------|
//! | Output directory cannot be created | batch aborts |
//! | Input directory missing / unreadable | batch aborts |
//! | No PNG files found | batch aborts |
//! | One file fails to decode, dither or encode | file skipped, batch continues |

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{DitherError, Result};
use crate::render::dither::dither_dynamic;
use crate::render::params::DitherParameters;

/// Suffix inserted between the file stem and the extension.
pub const OUTPUT_SUFFIX: &str = "_dithered";

/// Extensions picked up from the input directory (compared case-insensitively).
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["png"];

/// Everything a batch run needs.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory of frames, or a single frame file
    pub input: PathBuf,
    /// Destination directory (created if absent)
    pub output: PathBuf,
    pub params: DitherParameters,
    /// Optional JSON report destination
    pub report: Option<PathBuf>,
}

/// A frame that was dithered and written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedFrame {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// A frame that was skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFrame {
    pub input: PathBuf,
    pub reason: String,
}

/// Outcome of a batch run, in processing order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub parameters: DitherParameters,
    pub processed: Vec<ProcessedFrame>,
    pub skipped: Vec<SkippedFrame>,
}

impl BatchReport {
    fn new(parameters: DitherParameters) -> Self {
        Self {
            parameters,
            processed: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// True if every input was written.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| DitherError::Report {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|e| DitherError::io(path, e))
    }
}

/// Whether a path carries one of the [`RECOGNIZED_EXTENSIONS`].
pub fn is_recognized_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            RECOGNIZED_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Output file name for an input path: `<stem>_dithered.<ext>`.
///
/// The extension keeps its original spelling. Returns `None` for paths
/// without a file name.
///
/// ```
/// use std::path::Path;
/// use sprite_dither::batch::output_file_name;
///
/// assert_eq!(output_file_name(Path::new("frames/frame.png")).unwrap(), "frame_dithered.png");
/// assert_eq!(output_file_name(Path::new("POSE.PNG")).unwrap(), "POSE_dithered.PNG");
/// ```
pub fn output_file_name(input: &Path) -> Option<OsString> {
    let stem = input.file_stem()?;
    let mut name = stem.to_os_string();
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    Some(name)
}

/// List recognized image files in `dir`, sorted by file name.
///
/// Subdirectories and files with other extensions (such as pose metadata
/// JSON) are ignored.
pub fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| DitherError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DitherError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && is_recognized_image(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Dither one file into `output_dir`, returning what was written.
///
/// Any failure is returned to the caller with the offending path.
pub fn dither_file(
    input: &Path,
    output_dir: &Path,
    params: &DitherParameters,
) -> Result<ProcessedFrame> {
    let name = output_file_name(input).ok_or_else(|| {
        DitherError::InvalidImage(format!("{} has no file name", input.display()))
    })?;
    let output = output_dir.join(name);

    let decoded = image::open(input).map_err(|e| DitherError::image(input, e))?;
    let dithered = dither_dynamic(&decoded, params)?;
    dithered
        .save_with_format(&output, image::ImageFormat::Png)
        .map_err(|e| DitherError::image(&output, e))?;

    Ok(ProcessedFrame {
        input: input.to_path_buf(),
        output,
        width: dithered.width(),
        height: dithered.height(),
    })
}

/// Run a full batch.
///
/// Setup errors (output directory, input listing, no inputs) abort before
/// any frame is dithered. When `input` is a single file, it is processed in
/// single-image mode and its failure is returned as an error.
pub fn run_batch(options: &BatchOptions) -> Result<BatchReport> {
    let BatchOptions {
        input,
        output,
        params,
        report: report_path,
    } = options;

    fs::create_dir_all(output).map_err(|e| DitherError::io(output, e))?;

    let single = input.is_file();
    let inputs = if single {
        vec![input.clone()]
    } else {
        let inputs = collect_inputs(input)?;
        if inputs.is_empty() {
            return Err(DitherError::NoInputs { dir: input.clone() });
        }
        inputs
    };

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        files = inputs.len(),
        matrix = %format!("{}x{}", params.matrix().rows(), params.matrix().cols()),
        black_cutoff = params.black_cutoff(),
        white_cutoff = params.white_cutoff(),
        "starting batch"
    );

    let mut report = BatchReport::new(params.clone());

    for path in &inputs {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("Dithering {}", display_name);

        match dither_file(path, output, params) {
            Ok(frame) => {
                tracing::debug!(output = %frame.output.display(), "wrote frame");
                report.processed.push(frame);
            }
            Err(e) if !single => {
                tracing::warn!(file = %path.display(), error = %e, "skipping frame");
                report.skipped.push(SkippedFrame {
                    input: path.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    println!(
        "Dithering complete ({} written, {} skipped)",
        report.processed.len(),
        report.skipped.len()
    );
    tracing::info!(
        written = report.processed.len(),
        skipped = report.skipped.len(),
        "batch finished"
    );

    if let Some(path) = report_path {
        report.write_json(path)?;
    }

    Ok(report)
}
