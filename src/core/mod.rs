// img-resize/src/core/mod.rs
pub mod processor;

use crate::processors::DetectedFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Inputs smaller than this are left alone.
pub const SIZE_GATE_THRESHOLD: u64 = 100 * 1024;

/// Largest accepted side of a requested box.
pub const MAX_DIMENSION: u32 = 100_000;

/// Largest accepted output area.
pub const MAX_PIXELS: u64 = 100_000_000;

/// Quality used for JPEG output unless overridden.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// One resize invocation: read `input`, fit it into the `target_width` x
/// `target_height` box and write the same container format to `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub target_width: u32,
    pub target_height: u32,
}

impl ResizeRequest {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        input: P,
        output: Q,
        target_width: u32,
        target_height: u32,
    ) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            target_width,
            target_height,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// Inputs below this many bytes are skipped without writing any output.
    pub min_input_size: u64,
    pub jpeg_quality: u8,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            min_input_size: SIZE_GATE_THRESHOLD,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ProcessConfig {
    pub fn validate(&self) -> Result<()> {
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(ImageToolError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// What a successful call did. A skip is a success with no output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOutcome {
    Skipped {
        input_size: u64,
    },
    Resized {
        format: DetectedFormat,
        original: Dimensions,
        resized: Dimensions,
        input_size: u64,
        output_size: u64,
    },
}

impl ResizeOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, ResizeOutcome::Skipped { .. })
    }
}

#[derive(Error, Debug)]
pub enum ImageToolError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to rewind input: {0}")]
    Seek(#[source] std::io::Error),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("failed to decode {format}: {source}")]
    Decode {
        format: DetectedFormat,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {format}: {source}")]
    Encode {
        format: DetectedFormat,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to create output {}: {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, ImageToolError>;
