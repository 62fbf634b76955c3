// img-resize/src/processors/loader.rs
use super::sniffer::{detect_content_type, DetectedFormat, SNIFF_LEN};
use crate::core::{ImageToolError, Result};
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Result of sniffing the head of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sniffed {
    pub content_type: &'static str,
    pub format: DetectedFormat,
}

/// An open input image. The file handle is released when this is dropped,
/// whichever way the pipeline exits.
pub struct InputFile {
    path: PathBuf,
    reader: BufReader<File>,
    size: Option<u64>,
}

impl InputFile {
    pub fn open(path: &Path) -> Result<Self> {
        log::debug!("Opening input: {}", path.display());

        let file = File::open(path).map_err(|source| ImageToolError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let size = match file.metadata() {
            Ok(metadata) => Some(metadata.len()),
            Err(e) => {
                log::warn!("Could not stat {}: {}", path.display(), e);
                None
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            size,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte length, if the file could be stat'ed.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// True when the input is known to be smaller than `threshold`.
    /// An unknown size never counts as small.
    pub fn is_below(&self, threshold: u64) -> bool {
        matches!(self.size, Some(size) if size < threshold)
    }

    /// Reads up to [`SNIFF_LEN`] bytes, classifies them and rewinds to
    /// offset 0 so the decoder sees the whole stream. Shorter files are
    /// sniffed on whatever they hold; an empty file is a read error.
    pub fn sniff(&mut self) -> Result<Sniffed> {
        let mut prefix = Vec::with_capacity(SNIFF_LEN);
        self.reader
            .by_ref()
            .take(SNIFF_LEN as u64)
            .read_to_end(&mut prefix)
            .map_err(ImageToolError::Read)?;
        if prefix.is_empty() {
            return Err(ImageToolError::Read(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input is empty",
            )));
        }
        self.rewind()?;

        let content_type = detect_content_type(&prefix);
        let format = DetectedFormat::from_content_type(content_type);
        log::debug!(
            "Sniffed {} as {} ({})",
            self.path.display(),
            content_type,
            format
        );

        Ok(Sniffed {
            content_type,
            format,
        })
    }

    pub fn rewind(&mut self) -> Result<()> {
        self.reader
            .seek(SeekFrom::Start(0))
            .map_err(ImageToolError::Seek)?;
        Ok(())
    }

    pub fn reader(&mut self) -> &mut BufReader<File> {
        &mut self.reader
    }
}
