#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use image::codecs::jpeg::JpegEncoder;
    use image::codecs::webp::WebPEncoder;
    use image::{DynamicImage, Rgb, RgbImage};
    use img_resize::{
        resize_image, DetectedFormat, Dimensions, ImageProcessor, ImageToolError, ProcessConfig,
        ResizeOutcome, ResizeRequest, SIZE_GATE_THRESHOLD,
    };
    use std::fs;
    use std::path::Path;

    // Random pixels keep the encoded files well above the size gate.
    fn noise(width: u32, height: u32, seed: u64) -> DynamicImage {
        let mut state = seed;
        let img = RgbImage::from_fn(width, height, |_, _| {
            let mut px = [0u8; 3];
            for c in &mut px {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                *c = (state >> 56) as u8;
            }
            Rgb(px)
        });
        DynamicImage::ImageRgb8(img)
    }

    fn write_fixture(path: &Path, format: DetectedFormat, width: u32, height: u32) {
        let img = noise(width, height, u64::from(width) * 31 + u64::from(height));
        let file = fs::File::create(path).unwrap();
        match format {
            DetectedFormat::Jpeg => img
                .write_with_encoder(JpegEncoder::new_with_quality(file, 100))
                .unwrap(),
            DetectedFormat::Png => img
                .write_with_encoder(image::codecs::png::PngEncoder::new(file))
                .unwrap(),
            DetectedFormat::WebP => img
                .write_with_encoder(WebPEncoder::new_lossless(file))
                .unwrap(),
            DetectedFormat::Unknown => unreachable!(),
        }
        let size = fs::metadata(path).unwrap().len();
        assert!(
            size >= SIZE_GATE_THRESHOLD,
            "fixture {} is only {} bytes",
            path.display(),
            size
        );
    }

    fn sniff_file(path: &Path) -> DetectedFormat {
        let bytes = fs::read(path).unwrap();
        DetectedFormat::from_prefix(&bytes)
    }

    #[test]
    fn test_resize_jpeg() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("photo.jpg");
        let output = temp_dir.child("photo_resized.jpg");
        write_fixture(input.path(), DetectedFormat::Jpeg, 600, 400);

        resize_image(input.path(), output.path(), 300, 300).unwrap();

        assert!(output.path().exists());
        assert_eq!(sniff_file(output.path()), DetectedFormat::Jpeg);
        assert_eq!(image::image_dimensions(output.path()).unwrap(), (300, 200));
    }

    #[test]
    fn test_resize_png() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("shot.png");
        let output = temp_dir.child("shot_resized.png");
        write_fixture(input.path(), DetectedFormat::Png, 400, 300);

        // height 300, width 200: the width binds
        resize_image(input.path(), output.path(), 300, 200).unwrap();

        assert_eq!(sniff_file(output.path()), DetectedFormat::Png);
        assert_eq!(image::image_dimensions(output.path()).unwrap(), (200, 150));
    }

    #[test]
    fn test_resize_webp() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("portrait.webp");
        let output = temp_dir.child("portrait_resized.webp");
        write_fixture(input.path(), DetectedFormat::WebP, 320, 400);

        resize_image(input.path(), output.path(), 200, 200).unwrap();

        assert_eq!(sniff_file(output.path()), DetectedFormat::WebP);
        assert_eq!(image::image_dimensions(output.path()).unwrap(), (160, 200));
    }

    #[test]
    fn test_outcome_reports_dimensions() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("wide.png");
        let output = temp_dir.child("wide_out.png");
        write_fixture(input.path(), DetectedFormat::Png, 400, 200);

        let processor = ImageProcessor::new(ProcessConfig::default());
        let outcome = processor
            .process(&ResizeRequest::new(input.path(), output.path(), 300, 300))
            .unwrap();

        match outcome {
            ResizeOutcome::Resized {
                format,
                original,
                resized,
                input_size,
                output_size,
            } => {
                assert_eq!(format, DetectedFormat::Png);
                assert_eq!(original, Dimensions::new(400, 200));
                assert_eq!(resized, Dimensions::new(300, 150));
                assert_eq!(input_size, fs::metadata(input.path()).unwrap().len());
                assert_eq!(output_size, fs::metadata(output.path()).unwrap().len());
            }
            other => panic!("expected a resize, got {:?}", other),
        }
    }

    #[test]
    fn test_format_follows_content_not_extension() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("mislabelled.jpg");
        let output = temp_dir.child("mislabelled_out.jpg");
        write_fixture(input.path(), DetectedFormat::Png, 400, 300);

        resize_image(input.path(), output.path(), 150, 200).unwrap();

        assert_eq!(sniff_file(output.path()), DetectedFormat::Png);
    }

    #[test]
    fn test_already_fitting_image_keeps_its_size() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("exact.png");
        let output = temp_dir.child("exact_out.png");
        write_fixture(input.path(), DetectedFormat::Png, 400, 300);

        resize_image(input.path(), output.path(), 300, 400).unwrap();

        assert_eq!(image::image_dimensions(output.path()).unwrap(), (400, 300));
    }

    #[test]
    fn test_resize_to_tiny_box() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("photo.jpg");
        let output = temp_dir.child("photo_tiny.jpg");
        write_fixture(input.path(), DetectedFormat::Jpeg, 600, 400);

        resize_image(input.path(), output.path(), 1, 1).unwrap();

        assert_eq!(image::image_dimensions(output.path()).unwrap(), (1, 1));
    }

    #[test]
    fn test_small_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("small.png");
        let output = temp_dir.child("small_resized.png");
        image::RgbImage::new(16, 16).save(input.path()).unwrap();

        let outcome = ImageProcessor::default()
            .process(&ResizeRequest::new(input.path(), output.path(), 8, 8))
            .unwrap();

        assert!(outcome.is_skipped());
        assert!(!output.path().exists());
    }

    #[test]
    fn test_small_file_skip_ignores_bad_output_path() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("small.png");
        image::RgbImage::new(16, 16).save(input.path()).unwrap();
        let output = temp_dir.path().join("missing").join("out.png");

        resize_image(input.path(), &output, 8, 8).unwrap();

        assert!(!output.exists());
    }

    #[test]
    fn test_lowered_threshold_processes_small_files() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("small.png");
        let output = temp_dir.child("small_resized.png");
        noise(64, 32, 7).save(input.path()).unwrap();

        let config = ProcessConfig {
            min_input_size: 0,
            ..Default::default()
        };
        let outcome = ImageProcessor::new(config)
            .process(&ResizeRequest::new(input.path(), output.path(), 16, 16))
            .unwrap();

        assert!(!outcome.is_skipped());
        assert_eq!(image::image_dimensions(output.path()).unwrap(), (16, 8));
    }

    #[test]
    fn test_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = resize_image(
            temp_dir.path().join("nonexistent.jpg"),
            temp_dir.path().join("output.jpg"),
            200,
            200,
        );

        assert!(matches!(result, Err(ImageToolError::Open { .. })));
    }

    #[test]
    fn test_corrupted_image() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("corrupted.png");
        let output = temp_dir.child("corrupted_out.png");
        let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
        bytes.resize(SIZE_GATE_THRESHOLD as usize * 2, 0xAB);
        input.write_binary(&bytes).unwrap();

        let result = resize_image(input.path(), output.path(), 200, 200);

        assert!(matches!(
            result,
            Err(ImageToolError::Decode {
                format: DetectedFormat::Png,
                ..
            })
        ));
        assert!(!output.path().exists());
    }

    #[test]
    fn test_invalid_output_path() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("photo.jpg");
        write_fixture(input.path(), DetectedFormat::Jpeg, 600, 400);
        let before = fs::read(input.path()).unwrap();
        let output = temp_dir.path().join("no").join("such").join("dir.jpg");

        let result = resize_image(input.path(), &output, 200, 200);

        assert!(matches!(result, Err(ImageToolError::OutputCreate { .. })));
        assert_eq!(fs::read(input.path()).unwrap(), before);
    }

    #[test]
    fn test_unsupported_format() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("notes.png");
        let output = temp_dir.child("notes_out.png");
        input
            .write_str(&"not an image at all\n".repeat(8_000))
            .unwrap();

        let result = resize_image(input.path(), output.path(), 200, 200);

        match result {
            Err(ImageToolError::UnsupportedFormat(content_type)) => {
                assert_eq!(content_type, "text/plain; charset=utf-8");
            }
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
        assert!(!output.path().exists());
    }

    #[test]
    fn test_zero_box_is_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("shot.png");
        let output = temp_dir.child("shot_out.png");
        write_fixture(input.path(), DetectedFormat::Png, 400, 300);

        let result = resize_image(input.path(), output.path(), 0, 200);

        assert!(matches!(result, Err(ImageToolError::InvalidDimensions(_))));
        assert!(!output.path().exists());
    }

    #[test]
    fn test_oversized_box_is_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("small.png");
        let output = temp_dir.child("small_huge.png");
        noise(40, 20, 3).save(input.path()).unwrap();

        let config = ProcessConfig {
            min_input_size: 0,
            ..Default::default()
        };
        let result = ImageProcessor::new(config).process(&ResizeRequest::new(
            input.path(),
            output.path(),
            1_000_000,
            1_000_000,
        ));

        assert!(matches!(result, Err(ImageToolError::InvalidDimensions(_))));
        assert!(!output.path().exists());
    }

    #[test]
    fn test_image_shorter_than_sniff_window() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("tiny.png");
        let output = temp_dir.child("tiny_out.png");
        image::RgbImage::new(4, 4).save(input.path()).unwrap();
        assert!(fs::metadata(input.path()).unwrap().len() < 512);

        let config = ProcessConfig {
            min_input_size: 0,
            ..Default::default()
        };
        ImageProcessor::new(config)
            .process(&ResizeRequest::new(input.path(), output.path(), 2, 2))
            .unwrap();

        assert_eq!(image::image_dimensions(output.path()).unwrap(), (2, 2));
    }
}
