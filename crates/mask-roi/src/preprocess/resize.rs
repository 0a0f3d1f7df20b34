//! Mask and image resampling on top of `image::imageops`.

use image::imageops;
use image::GrayImage;

use super::Interpolation;

/// Resample a mask to `width` x `height`.
///
/// Returns an unchanged copy when the mask already has the target size,
/// so a same-size mask is never blurred by a linear filter.
pub fn resize_mask(
    mask: &GrayImage,
    width: u32,
    height: u32,
    interpolation: Interpolation,
) -> GrayImage {
    resize_gray(mask, width, height, interpolation)
}

/// Resample a grayscale image to `width` x `height`.
///
/// With [`Interpolation::Area`], shrinking in both directions averages the
/// source pixels covered by each destination pixel; any enlargement falls
/// back to bilinear.
pub fn resize_image(
    image: &GrayImage,
    width: u32,
    height: u32,
    interpolation: Interpolation,
) -> GrayImage {
    resize_gray(image, width, height, interpolation)
}

fn resize_gray(
    source: &GrayImage,
    width: u32,
    height: u32,
    interpolation: Interpolation,
) -> GrayImage {
    let (src_width, src_height) = source.dimensions();
    if (src_width, src_height) == (width, height) {
        return source.clone();
    }
    if width == 0 || height == 0 || src_width == 0 || src_height == 0 {
        return GrayImage::new(width, height);
    }

    match interpolation {
        Interpolation::Area if width <= src_width && height <= src_height => {
            imageops::thumbnail(source, width, height)
        }
        other => imageops::resize(source, width, height, other.filter()),
    }
}
