use anyhow::Context;
use clap::Parser;
use img_resize::{
    calculate_aspect_ratio, format_file_size, generate_output_path, Cli, Codec, Commands, Dimensions,
    ImageProcessor, InputFile, ProcessConfig, ResizeOutcome, ResizeRequest, SIZE_GATE_THRESHOLD,
};
use log::LevelFilter;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match cli.command {
        Commands::Resize {
            input,
            output,
            width,
            height,
            quality,
            min_size,
        } => process_resize(input, output, width, height, quality, min_size),
        Commands::Info { input } => process_info(input),
    }
}

fn process_resize(
    input: PathBuf,
    output: Option<PathBuf>,
    width: u32,
    height: u32,
    quality: u8,
    min_size: u64,
) -> anyhow::Result<()> {
    let output_path = generate_output_path(&input, output.as_deref(), "resized");

    let config = ProcessConfig {
        min_input_size: min_size,
        jpeg_quality: quality,
    };

    let processor = ImageProcessor::new(config);
    let request = ResizeRequest::new(&input, &output_path, width, height);
    let outcome = processor
        .process(&request)
        .with_context(|| format!("Failed to resize {}", input.display()))?;

    match outcome {
        ResizeOutcome::Skipped { input_size } => {
            println!(
                "Skipped {} ({}): already below the size threshold",
                input.display(),
                format_file_size(input_size)
            );
        }
        ResizeOutcome::Resized {
            format,
            original,
            resized,
            input_size,
            output_size,
        } => {
            println!(
                "Resized {} image {} -> {} ({} -> {}), saved to: {}",
                format,
                original,
                resized,
                format_file_size(input_size),
                format_file_size(output_size),
                output_path.display()
            );
        }
    }

    Ok(())
}

fn process_info(input: PathBuf) -> anyhow::Result<()> {
    let mut file = InputFile::open(&input)?;
    let sniffed = file
        .sniff()
        .with_context(|| format!("Failed to sniff {}", input.display()))?;

    println!("=== Image Information ===");
    println!("File: {}", input.display());
    match file.size() {
        Some(size) => println!("Size: {}", format_file_size(size)),
        None => println!("Size: unknown"),
    }
    println!("Content-Type: {}", sniffed.content_type);
    println!("Format: {}", sniffed.format);

    if let Some(codec) = Codec::for_format(sniffed.format) {
        let image = codec.decode(file.reader())?;
        let dims = Dimensions::new(image.width(), image.height());
        let aspect_ratio = calculate_aspect_ratio(dims.width, dims.height);
        println!("Dimensions: {} x {} pixels", dims.width, dims.height);
        println!("Aspect Ratio: {:.2}:1", aspect_ratio);
    }

    println!(
        "Below size threshold: {}",
        file.is_below(SIZE_GATE_THRESHOLD)
    );

    Ok(())
}
