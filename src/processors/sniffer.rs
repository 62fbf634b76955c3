// img-resize/src/processors/sniffer.rs
//! Content-type sniffing over the first [`SNIFF_LEN`] bytes of a stream.
//!
//! Signatures come from `infer`. Content it does not recognise is reported
//! as plain text when it holds no binary control bytes and as
//! `application/octet-stream` otherwise. Only the image results matter to
//! the resize pipeline; everything else becomes [`DetectedFormat::Unknown`].
use std::fmt;

/// Number of leading bytes considered when sniffing.
pub const SNIFF_LEN: usize = 512;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectedFormat {
    Jpeg,
    Png,
    WebP,
    Unknown,
}

impl DetectedFormat {
    /// Maps a sniffed MIME type onto a pipeline format.
    pub fn from_content_type(content_type: &str) -> Self {
        match content_type {
            "image/jpeg" | "image/jpg" => DetectedFormat::Jpeg,
            "image/png" => DetectedFormat::Png,
            "image/webp" => DetectedFormat::WebP,
            _ => DetectedFormat::Unknown,
        }
    }

    pub fn from_prefix(prefix: &[u8]) -> Self {
        Self::from_content_type(detect_content_type(prefix))
    }
}

impl fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectedFormat::Jpeg => "JPEG",
            DetectedFormat::Png => "PNG",
            DetectedFormat::WebP => "WebP",
            DetectedFormat::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

fn is_binary(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

/// Classifies `data` by its leading bytes and returns a MIME type.
///
/// Never fails: unrecognised content falls back to
/// `text/plain; charset=utf-8` or `application/octet-stream`.
pub fn detect_content_type(data: &[u8]) -> &'static str {
    let data = &data[..data.len().min(SNIFF_LEN)];

    if let Some(kind) = infer::get(data) {
        return kind.mime_type();
    }

    if data.iter().any(|&b| is_binary(b)) {
        OCTET_STREAM
    } else {
        TEXT_PLAIN
    }
}
