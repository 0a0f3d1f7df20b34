//! RoiResult struct holding the artifacts of one extraction.

use image::{GrayImage, RgbImage};

use crate::contour::Contour;
use crate::masking::coverage;

/// The artifacts of a single contour-based ROI extraction.
///
/// All images share the source image's dimensions. The ROI is the primary
/// output; the rest are kept so callers can inspect or persist them without
/// recomputing anything.
///
/// # Example
///
/// ```
/// use image::{GrayImage, Luma};
/// use mask_roi::RoiExtractor;
///
/// let image = GrayImage::from_pixel(5, 5, Luma([40]));
/// let mask = GrayImage::new(5, 5);
///
/// let result = RoiExtractor::default().extract(&image, &mask).unwrap();
///
/// assert!(result.contours().is_empty());
/// assert_eq!(result.region_coverage(), 0);
/// assert!(result.roi().pixels().all(|p| p[0] == 0));
/// ```
#[derive(Debug, Clone)]
pub struct RoiResult {
    resized_mask: GrayImage,
    contours: Vec<Contour>,
    overlay: RgbImage,
    region_mask: GrayImage,
    roi: GrayImage,
}

impl RoiResult {
    pub(crate) fn new(
        resized_mask: GrayImage,
        contours: Vec<Contour>,
        overlay: RgbImage,
        region_mask: GrayImage,
        roi: GrayImage,
    ) -> Self {
        debug_assert_eq!(resized_mask.dimensions(), roi.dimensions());
        debug_assert_eq!(region_mask.dimensions(), roi.dimensions());
        debug_assert_eq!(overlay.dimensions(), roi.dimensions());
        Self {
            resized_mask,
            contours,
            overlay,
            region_mask,
            roi,
        }
    }

    /// Image pixels inside the filled contours, zero elsewhere.
    #[inline]
    pub fn roi(&self) -> &GrayImage {
        &self.roi
    }

    /// Binary region mask (255 inside, 0 outside).
    #[inline]
    pub fn region_mask(&self) -> &GrayImage {
        &self.region_mask
    }

    /// Source image with the contour outlines drawn in the highlight color.
    #[inline]
    pub fn overlay(&self) -> &RgbImage {
        &self.overlay
    }

    /// The mask after resampling to the image size.
    #[inline]
    pub fn resized_mask(&self) -> &GrayImage {
        &self.resized_mask
    }

    /// External contours of the resized mask.
    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Number of pixels set in the region mask.
    pub fn region_coverage(&self) -> usize {
        coverage(&self.region_mask)
    }

    /// Consume the result, keeping only the ROI.
    pub fn into_roi(self) -> GrayImage {
        self.roi
    }
}
