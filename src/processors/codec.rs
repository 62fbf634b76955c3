// img-resize/src/processors/codec.rs
use super::sniffer::DetectedFormat;
use crate::core::{ImageToolError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageFormat, ImageReader, ImageResult};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufWriter, Seek, Write};
use std::path::Path;

/// Any buffered, seekable byte source a decoder can consume.
pub trait ImageSource: BufRead + Seek {}

impl<T: BufRead + Seek> ImageSource for T {}

type DecodeFn = fn(&mut dyn ImageSource) -> ImageResult<DynamicImage>;
type EncodeFn = fn(&DynamicImage, &mut dyn Write, u8) -> ImageResult<()>;

/// Decode/encode pair for one container format.
#[derive(Clone, Copy)]
pub struct Codec {
    format: DetectedFormat,
    decode: DecodeFn,
    encode: EncodeFn,
}

const JPEG: Codec = Codec {
    format: DetectedFormat::Jpeg,
    decode: decode_jpeg,
    encode: encode_jpeg,
};

const PNG: Codec = Codec {
    format: DetectedFormat::Png,
    decode: decode_png,
    encode: encode_png,
};

const WEBP: Codec = Codec {
    format: DetectedFormat::WebP,
    decode: decode_webp,
    encode: encode_webp,
};

impl Codec {
    /// Returns the codec for a supported format, `None` for
    /// [`DetectedFormat::Unknown`].
    pub fn for_format(format: DetectedFormat) -> Option<Codec> {
        match format {
            DetectedFormat::Jpeg => Some(JPEG),
            DetectedFormat::Png => Some(PNG),
            DetectedFormat::WebP => Some(WEBP),
            DetectedFormat::Unknown => None,
        }
    }

    pub fn format(&self) -> DetectedFormat {
        self.format
    }

    /// Decodes the whole stream from its current position.
    pub fn decode(&self, source: &mut dyn ImageSource) -> Result<DynamicImage> {
        (self.decode)(source).map_err(|source| ImageToolError::Decode {
            format: self.format,
            source,
        })
    }

    /// Encodes `image` into `writer` in this codec's container.
    pub fn encode(&self, image: &DynamicImage, writer: &mut dyn Write, quality: u8) -> Result<()> {
        (self.encode)(image, writer, quality).map_err(|source| ImageToolError::Encode {
            format: self.format,
            source,
        })
    }

    /// Creates (or truncates) `path` and writes `image` into it. The file is
    /// flushed and closed on every return path; a failed encode may leave a
    /// partial file behind.
    pub fn save(&self, image: &DynamicImage, path: &Path, quality: u8) -> Result<u64> {
        log::debug!("Saving {} image to {}", self.format, path.display());

        let file = File::create(path).map_err(|source| ImageToolError::OutputCreate {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        self.encode(image, &mut writer, quality)?;
        let file = writer.into_inner().map_err(|e| ImageToolError::Encode {
            format: self.format,
            source: e.into_error().into(),
        })?;

        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        log::info!("Saved image: {} ({} bytes)", path.display(), written);
        Ok(written)
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec").field("format", &self.format).finish()
    }
}

fn decode_with(source: &mut dyn ImageSource, format: ImageFormat) -> ImageResult<DynamicImage> {
    ImageReader::with_format(source, format).decode()
}

fn decode_jpeg(source: &mut dyn ImageSource) -> ImageResult<DynamicImage> {
    decode_with(source, ImageFormat::Jpeg)
}

fn decode_png(source: &mut dyn ImageSource) -> ImageResult<DynamicImage> {
    decode_with(source, ImageFormat::Png)
}

fn decode_webp(source: &mut dyn ImageSource) -> ImageResult<DynamicImage> {
    decode_with(source, ImageFormat::WebP)
}

fn encode_jpeg(image: &DynamicImage, writer: &mut dyn Write, quality: u8) -> ImageResult<()> {
    // JPEG has no alpha channel and only 8-bit samples
    let image = match image {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => Cow::Borrowed(image),
        other if other.color().has_color() => Cow::Owned(DynamicImage::ImageRgb8(other.to_rgb8())),
        other => Cow::Owned(DynamicImage::ImageLuma8(other.to_luma8())),
    };
    image.write_with_encoder(JpegEncoder::new_with_quality(writer, quality))
}

fn encode_png(image: &DynamicImage, writer: &mut dyn Write, _quality: u8) -> ImageResult<()> {
    image.write_with_encoder(PngEncoder::new(writer))
}

fn encode_webp(image: &DynamicImage, writer: &mut dyn Write, _quality: u8) -> ImageResult<()> {
    // the lossless encoder only takes 8-bit RGB(A) and luma
    let image = match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => Cow::Borrowed(image),
        other if other.color().has_alpha() => Cow::Owned(DynamicImage::ImageRgba8(other.to_rgba8())),
        other => Cow::Owned(DynamicImage::ImageRgb8(other.to_rgb8())),
    };
    image.write_with_encoder(WebPEncoder::new_lossless(writer))
}
