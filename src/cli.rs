// img-resize/src/cli.rs
use crate::core::{DEFAULT_JPEG_QUALITY, SIZE_GATE_THRESHOLD};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "img-resize", version, about = "Fit JPEG, PNG and WebP images into a bounding box")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resize an image to fit within WIDTH x HEIGHT, keeping its aspect ratio
    Resize {
        input: PathBuf,

        /// Output file (defaults to <stem>_resized.<ext> next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short = 'W', long)]
        width: u32,

        #[arg(short = 'H', long)]
        height: u32,

        /// JPEG quality (1-100)
        #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY)]
        quality: u8,

        /// Inputs smaller than this many bytes are skipped
        #[arg(long, default_value_t = SIZE_GATE_THRESHOLD)]
        min_size: u64,
    },
    /// Show the sniffed format and dimensions of an image
    Info { input: PathBuf },
}
