// img-resize/src/core/processor.rs
use super::{Dimensions, ImageToolError, ProcessConfig, ResizeOutcome, ResizeRequest, Result};
use crate::processors::{Codec, InputFile, Resizer};
use crate::utils::format_file_size;
use std::path::Path;

/// Runs the resize pipeline:
/// open, size gate, sniff, rewind, decode, fit, resample, encode.
pub struct ImageProcessor {
    config: ProcessConfig,
    resizer: Resizer,
}

impl ImageProcessor {
    pub fn new(config: ProcessConfig) -> Self {
        Self {
            config,
            resizer: Resizer::new(),
        }
    }

    pub fn process(&self, request: &ResizeRequest) -> Result<ResizeOutcome> {
        self.config.validate()?;

        let requested = Dimensions::new(request.target_width, request.target_height);
        let mut input = InputFile::open(&request.input)?;

        if input.is_below(self.config.min_input_size) {
            let input_size = input.size().unwrap_or(0);
            log::info!(
                "{} is {}, below the {} threshold; skipping",
                input.path().display(),
                format_file_size(input_size),
                format_file_size(self.config.min_input_size)
            );
            return Ok(ResizeOutcome::Skipped { input_size });
        }

        let sniffed = input.sniff()?;
        let codec = Codec::for_format(sniffed.format).ok_or_else(|| {
            ImageToolError::UnsupportedFormat(sniffed.content_type.to_string())
        })?;

        let image = codec.decode(input.reader())?;
        let original = Dimensions::new(image.width(), image.height());
        log::debug!("Decoded {} image: {}", codec.format(), original);

        let (resized, target) = self.resizer.resize_to_fit(image, requested)?;

        let output_size = codec.save(&resized, &request.output, self.config.jpeg_quality)?;
        log::info!(
            "Resized {} from {} to {}: {}",
            input.path().display(),
            original,
            target,
            request.output.display()
        );

        Ok(ResizeOutcome::Resized {
            format: codec.format(),
            original,
            resized: target,
            input_size: input.size().unwrap_or(0),
            output_size,
        })
    }
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self::new(ProcessConfig::default())
    }
}

/// Resizes `input` into the `target_width` x `target_height` box and writes
/// the result to `output` in the same format.
///
/// Inputs smaller than 100 KiB are skipped: the call succeeds and no output
/// file is written.
pub fn resize_image<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    target_height: u32,
    target_width: u32,
) -> Result<()> {
    let request = ResizeRequest::new(input, output, target_width, target_height);
    ImageProcessor::default().process(&request).map(|_| ())
}
