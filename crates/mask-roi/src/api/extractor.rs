//! RoiExtractor -- the contour-fill entry point for the crate.
//!
//! [`RoiExtractor`] wraps the resize, trace, rasterize and select stages
//! behind a reusable builder.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

use super::{MaskError, RoiOptions};
use crate::contour::{draw_contours, fill_contours, find_external_contours};
use crate::masking::select;
use crate::output::RoiResult;
use crate::preprocess::{resize_mask, Interpolation};

/// Region-of-interest extractor based on filled external contours.
///
/// # Design
///
/// - Configuration methods consume and return `self` (builder pattern)
/// - [`extract()`](Self::extract) takes `&self`, so one extractor serves a
///   whole dataset
/// - Nothing is rendered for display; the overlay is returned as data and the
///   caller decides what to do with it
///
/// # Example
///
/// ```
/// use image::{GrayImage, Luma};
/// use mask_roi::{RoiExtractor, RoiOptions};
///
/// let image = GrayImage::from_pixel(6, 6, Luma([90]));
/// let mask = GrayImage::from_pixel(6, 6, Luma([255]));
///
/// let extractor = RoiExtractor::new(RoiOptions::default()).thickness(2);
/// let result = extractor.extract(&image, &mask).unwrap();
///
/// assert_eq!(result.roi(), &image);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoiExtractor {
    options: RoiOptions,
}

impl RoiExtractor {
    /// Create an extractor with the given options.
    pub fn new(options: RoiOptions) -> Self {
        Self { options }
    }

    /// Set outline thickness.
    #[inline]
    pub fn thickness(mut self, thickness: u32) -> Self {
        self.options = self.options.thickness(thickness);
        self
    }

    /// Set overlay outline color.
    #[inline]
    pub fn highlight(mut self, rgb: [u8; 3]) -> Self {
        self.options = self.options.highlight(rgb);
        self
    }

    /// Set mask resampling method.
    #[inline]
    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.options = self.options.interpolation(interpolation);
        self
    }

    /// Current options.
    pub fn options(&self) -> &RoiOptions {
        &self.options
    }

    /// Extract the region of `image` enclosed by the external contours of `mask`.
    ///
    /// Steps:
    /// 1. Resize the mask to the image size (skipped when sizes match)
    /// 2. Trace external contours of the resized mask's non-zero pixels
    /// 3. Draw the outlines onto an RGB copy of the image (overlay)
    /// 4. Draw the outlines onto a blank canvas and fill their interiors
    /// 5. Keep image pixels where that region mask is set
    ///
    /// An all-zero mask is not an error: it yields no contours and an
    /// all-zero ROI of the image's size.
    pub fn extract(&self, image: &GrayImage, mask: &GrayImage) -> Result<RoiResult, MaskError> {
        ensure_not_empty("image", image)?;
        ensure_not_empty("mask", mask)?;

        let (width, height) = image.dimensions();
        let thickness = self.options.thickness.max(1);

        // 1. Resize
        let resized_mask = resize_mask(mask, width, height, self.options.interpolation);

        // 2. Trace
        let contours = find_external_contours(&resized_mask);

        // 3. Overlay
        let mut overlay: RgbImage = DynamicImage::ImageLuma8(image.clone()).to_rgb8();
        draw_contours(
            &mut overlay,
            &contours,
            Rgb(self.options.highlight),
            thickness,
        );

        // 4. Region mask: outline at the configured thickness, then interiors
        let mut region_mask = GrayImage::new(width, height);
        draw_contours(&mut region_mask, &contours, Luma([u8::MAX]), thickness);
        fill_contours(&mut region_mask, &contours, u8::MAX);

        // 5. Select
        let roi = select(image, &region_mask);

        Ok(RoiResult::new(
            resized_mask,
            contours,
            overlay,
            region_mask,
            roi,
        ))
    }
}

/// Extract the ROI of `image` under `mask`, discarding intermediate artifacts.
///
/// Shorthand for `RoiExtractor::new(options.clone()).extract(image, mask)`
/// followed by [`RoiResult::into_roi`].
pub fn extract_roi(
    image: &GrayImage,
    mask: &GrayImage,
    options: &RoiOptions,
) -> Result<GrayImage, MaskError> {
    RoiExtractor::new(options.clone())
        .extract(image, mask)
        .map(RoiResult::into_roi)
}

fn ensure_not_empty(role: &'static str, image: &GrayImage) -> Result<(), MaskError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(MaskError::EmptyImage {
            role,
            width,
            height,
        });
    }
    Ok(())
}
