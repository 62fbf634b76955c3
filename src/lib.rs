mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{Cli, Commands};
pub use crate::core::processor::{resize_image, ImageProcessor};
pub use crate::core::{
    Dimensions, ImageToolError, ProcessConfig, ResizeOutcome, ResizeRequest, Result,
    DEFAULT_JPEG_QUALITY, MAX_DIMENSION, MAX_PIXELS, SIZE_GATE_THRESHOLD,
};
pub use processors::{
    detect_content_type, fit_within, Codec, DetectedFormat, ImageSource, InputFile, Resizer,
    Sniffed, SNIFF_LEN,
};
pub use utils::{calculate_aspect_ratio, format_file_size, generate_output_path};

pub mod prelude {
    pub use crate::{
        resize_image, DetectedFormat, Dimensions, ImageProcessor, ImageToolError, ProcessConfig,
        ResizeOutcome, ResizeRequest,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
