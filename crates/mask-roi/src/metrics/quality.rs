//! Intensity statistics, sharpness and information content.

use image::GrayImage;
use serde::{Deserialize, Serialize};

/// Per-image quality metrics.
///
/// # Example
///
/// ```
/// use image::{GrayImage, Luma};
/// use mask_roi::QualityMetrics;
///
/// let image = GrayImage::from_fn(4, 1, |x, _| Luma([if x < 2 { 0 } else { 255 }]));
/// let metrics = QualityMetrics::measure(&image);
///
/// assert_eq!(metrics.contrast, 255);
/// assert!((metrics.entropy - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Mean pixel value
    pub mean_intensity: f64,
    /// Population variance of pixel values
    pub variance: f64,
    /// Variance of the Laplacian; low values indicate a blurry image
    pub blurriness: f64,
    /// Max minus min pixel value
    pub contrast: u8,
    /// Shannon entropy of the intensity histogram, in bits
    pub entropy: f64,
}

impl QualityMetrics {
    /// Compute all metrics for `image`.
    pub fn measure(image: &GrayImage) -> Self {
        Self {
            mean_intensity: mean_intensity(image),
            variance: variance(image),
            blurriness: blurriness(image),
            contrast: contrast(image),
            entropy: entropy(image),
        }
    }
}

/// Mean pixel value.
pub fn mean_intensity(image: &GrayImage) -> f64 {
    mean_and_variance(image.as_raw().iter().map(|&v| f64::from(v))).0
}

/// Population variance of the pixel values.
pub fn variance(image: &GrayImage) -> f64 {
    mean_and_variance(image.as_raw().iter().map(|&v| f64::from(v))).1
}

/// Max minus min pixel value (0 for an empty image).
pub fn contrast(image: &GrayImage) -> u8 {
    let raw = image.as_raw();
    match (raw.iter().max(), raw.iter().min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    }
}

/// Shannon entropy (base 2) of the 256-bin intensity histogram.
pub fn entropy(image: &GrayImage) -> f64 {
    let raw = image.as_raw();
    if raw.is_empty() {
        return 0.0;
    }
    let mut histogram = [0u64; 256];
    for &v in raw {
        histogram[v as usize] += 1;
    }
    let total = raw.len() as f64;
    histogram
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Variance of the 4-neighbour Laplacian `[0 1 0; 1 -4 1; 0 1 0]`.
///
/// Evaluated at every pixel, with the border mirrored without repeating
/// the edge pixel (`dcb|abcd|cba`).
pub fn blurriness(image: &GrayImage) -> f64 {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return 0.0;
    }
    let at = |x: i64, y: i64| -> f64 {
        let x = reflect(x, width as i64);
        let y = reflect(y, height as i64);
        f64::from(image.get_pixel(x as u32, y as u32)[0])
    };

    let responses = (0..height as i64).flat_map(|y| {
        (0..width as i64).map(move |x| {
            at(x, y - 1) + at(x, y + 1) + at(x - 1, y) + at(x + 1, y) - 4.0 * at(x, y)
        })
    });
    mean_and_variance(responses).1
}

/// Mirror an out-of-range index back into `0..len`, edge not repeated.
fn reflect(i: i64, len: i64) -> i64 {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len - 1);
    let i = i.rem_euclid(period);
    if i < len {
        i
    } else {
        period - i
    }
}

/// Mean and population variance, one pass (Welford).
fn mean_and_variance(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut count = 0u64;
    let mut mean = 0.0;
    let mut m2 = 0.0;
    for v in values {
        count += 1;
        let delta = v - mean;
        mean += delta / count as f64;
        m2 += delta * (v - mean);
    }
    if count == 0 {
        (0.0, 0.0)
    } else {
        (mean, m2 / count as f64)
    }
}
