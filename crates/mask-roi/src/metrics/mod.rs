//! Grayscale quality metrics for dataset screening.
//!
//! [`QualityMetrics::measure`] computes everything in one call; the
//! individual statistics are also exported for ad-hoc use. Empty images
//! report 0 for every metric.

mod frame;
mod quality;

pub use frame::has_black_frame;
pub use quality::{blurriness, contrast, entropy, mean_intensity, variance, QualityMetrics};
