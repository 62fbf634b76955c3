// img-resize/src/utils/mod.rs
use std::path::{Path, PathBuf};

/// Output path used when the caller doesn't pick one: `<stem>_<suffix>.<ext>`
/// beside the input.
pub fn generate_output_path(input_path: &Path, output: Option<&Path>, suffix: &str) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => {
            let stem = input_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("image");

            let new_filename = match input_path.extension().and_then(|ext| ext.to_str()) {
                Some(extension) => format!("{}_{}.{}", stem, suffix, extension),
                None => format!("{}_{}", stem, suffix),
            };

            input_path.with_file_name(new_filename)
        }
    }
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.ln() / base.ln()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}

pub fn calculate_aspect_ratio(width: u32, height: u32) -> f64 {
    if height == 0 {
        0.0
    } else {
        width as f64 / height as f64
    }
}
