// img-resize/src/processors/mod.rs
mod codec;
mod loader;
mod resizer;
mod sniffer;

pub use codec::{Codec, ImageSource};
pub use loader::{InputFile, Sniffed};
pub use resizer::{fit_within, Resizer};
pub use sniffer::{detect_content_type, DetectedFormat, SNIFF_LEN};
