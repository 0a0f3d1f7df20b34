//! Direct pixel selection by mask.
//!
//! A pixel survives wherever the mask is non-zero and becomes 0 elsewhere.
//! This is the selection used by the batch mask applier; the contour-based
//! extractor ends with the same step on its filled region mask.

use image::{GrayImage, Luma};

use crate::api::MaskError;
use crate::preprocess::{resize_mask, Interpolation};

/// Keep `image` pixels where `mask` is non-zero.
///
/// The mask must have exactly the image's dimensions; use
/// [`apply_mask_resized`] when it might not.
///
/// # Example
///
/// ```
/// use image::{GrayImage, Luma};
/// use mask_roi::apply_mask;
///
/// let image = GrayImage::from_pixel(2, 1, Luma([9]));
/// let mut mask = GrayImage::new(2, 1);
/// mask.put_pixel(1, 0, Luma([1]));
///
/// let out = apply_mask(&image, &mask).unwrap();
/// assert_eq!(out.as_raw(), &vec![0, 9]);
/// ```
pub fn apply_mask(image: &GrayImage, mask: &GrayImage) -> Result<GrayImage, MaskError> {
    if image.dimensions() != mask.dimensions() {
        return Err(MaskError::DimensionMismatch {
            image_width: image.width(),
            image_height: image.height(),
            mask_width: mask.width(),
            mask_height: mask.height(),
        });
    }
    Ok(select(image, mask))
}

/// Resample `mask` to the image size if needed, then apply it.
///
/// Pass [`Interpolation::Nearest`] to keep the mask binary.
pub fn apply_mask_resized(
    image: &GrayImage,
    mask: &GrayImage,
    interpolation: Interpolation,
) -> GrayImage {
    let (width, height) = image.dimensions();
    let resized = resize_mask(mask, width, height, interpolation);
    select(image, &resized)
}

/// Number of non-zero mask pixels.
pub fn coverage(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| p[0] > 0).count()
}

/// Selection on same-sized buffers.
pub(crate) fn select(image: &GrayImage, mask: &GrayImage) -> GrayImage {
    debug_assert_eq!(image.dimensions(), mask.dimensions());
    let mut out = image.clone();
    for (pixel, m) in out.pixels_mut().zip(mask.pixels()) {
        if m[0] == 0 {
            *pixel = Luma([0]);
        }
    }
    out
}
