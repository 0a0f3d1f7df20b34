//! Dark border detection.

use image::GrayImage;

/// Whether the image is surrounded by a dark frame.
///
/// Collects the top and bottom `border` rows and the left and right
/// `border` columns (corners are counted twice) and compares their mean
/// intensity against `max_mean`. A border wider than the image covers the
/// whole image.
pub fn has_black_frame(image: &GrayImage, border: u32, max_mean: f64) -> bool {
    let (width, height) = image.dimensions();
    let rows = border.min(height);
    let cols = border.min(width);

    let mut sum = 0u64;
    let mut count = 0u64;
    let mut add = |x: u32, y: u32| {
        sum += u64::from(image.get_pixel(x, y)[0]);
        count += 1;
    };

    for y in (0..rows).chain(height - rows..height) {
        for x in 0..width {
            add(x, y);
        }
    }
    for y in 0..height {
        for x in (0..cols).chain(width - cols..width) {
            add(x, y);
        }
    }

    count > 0 && (sum as f64 / count as f64) < max_mean
}
