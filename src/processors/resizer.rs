// img-resize/src/processors/resizer.rs
use crate::core::{Dimensions, ImageToolError, Result, MAX_DIMENSION, MAX_PIXELS};
use image::{imageops::FilterType, DynamicImage};

/// Computes the largest size with the original's aspect ratio that fits the
/// requested box. One axis always lands exactly on the requested value and
/// the other is at most its requested counterpart.
///
/// ```
/// # use img_resize::{fit_within, Dimensions};
/// let fitted = fit_within(Dimensions::new(800, 400), Dimensions::new(300, 300)).unwrap();
/// assert_eq!(fitted, Dimensions::new(300, 150));
/// ```
pub fn fit_within(original: Dimensions, requested: Dimensions) -> Result<Dimensions> {
    if requested.width == 0 || requested.height == 0 {
        return Err(ImageToolError::InvalidDimensions(format!(
            "requested box {} must be non-zero on both axes",
            requested
        )));
    }
    if requested.width > MAX_DIMENSION || requested.height > MAX_DIMENSION {
        return Err(ImageToolError::InvalidDimensions(format!(
            "requested box {} exceeds the {} pixel limit per axis",
            requested, MAX_DIMENSION
        )));
    }
    if original.width == 0 || original.height == 0 {
        return Err(ImageToolError::InvalidDimensions(format!(
            "source image {} has no area",
            original
        )));
    }

    let aspect = original.width as f64 / original.height as f64;
    let req_w = requested.width as f64;
    let req_h = requested.height as f64;

    let fitted = if req_w / aspect > req_h {
        // height binds
        let width = (req_h * aspect).round() as u32;
        Dimensions::new(width.max(1), requested.height)
    } else {
        let height = (req_w / aspect).round() as u32;
        Dimensions::new(requested.width, height.max(1))
    };

    if u64::from(fitted.width) * u64::from(fitted.height) > MAX_PIXELS {
        return Err(ImageToolError::InvalidDimensions(format!(
            "output {} exceeds {} pixels",
            fitted, MAX_PIXELS
        )));
    }

    Ok(fitted)
}

/// Resamples decoded images with a fixed Lanczos3 kernel.
#[derive(Debug, Default, Clone, Copy)]
pub struct Resizer;

impl Resizer {
    const FILTER: FilterType = FilterType::Lanczos3;

    pub fn new() -> Self {
        Self
    }

    /// Fits `image` into `requested` and resamples it, returning the new
    /// image along with its dimensions.
    pub fn resize_to_fit(
        &self,
        image: DynamicImage,
        requested: Dimensions,
    ) -> Result<(DynamicImage, Dimensions)> {
        let original = Dimensions::new(image.width(), image.height());
        let target = fit_within(original, requested)?;
        Ok((self.resample(image, target), target))
    }

    pub fn resample(&self, image: DynamicImage, target: Dimensions) -> DynamicImage {
        if target.width == image.width() && target.height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resample");
            return image;
        }

        log::debug!(
            "Resampling image from {}x{} to {}",
            image.width(),
            image.height(),
            target
        );

        image.resize_exact(target.width, target.height, Self::FILTER)
    }
}
