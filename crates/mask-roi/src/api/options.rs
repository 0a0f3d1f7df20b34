//! Configuration for contour-based ROI extraction.

use serde::{Deserialize, Serialize};

use crate::preprocess::Interpolation;

/// Configuration options for [`RoiExtractor`](crate::RoiExtractor).
///
/// # Defaults
///
/// - Thickness: 1 pixel
/// - Highlight: pure red
/// - Interpolation: linear (smooth boundary for contour tracing)
///
/// The struct deserializes with every field optional, so it can be embedded
/// directly in an application's config file.
///
/// # Example
///
/// ```
/// use mask_roi::{Interpolation, RoiOptions};
///
/// let options = RoiOptions::new()
///     .thickness(3)
///     .highlight([0, 255, 0])
///     .interpolation(Interpolation::Nearest);
///
/// assert_eq!(options.thickness, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiOptions {
    /// Outline thickness in pixels, used both for the overlay and for the
    /// outline burned into the region mask.
    ///
    /// A value of 0 is treated as 1.
    pub thickness: u32,

    /// RGB color of the outline drawn on the overlay.
    pub highlight: [u8; 3],

    /// Resampling used when the mask is not already the image's size.
    pub interpolation: Interpolation,
}

impl Default for RoiOptions {
    fn default() -> Self {
        Self {
            thickness: 1,
            highlight: [255, 0, 0],
            interpolation: Interpolation::Linear,
        }
    }
}

impl RoiOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outline thickness in pixels.
    #[inline]
    pub fn thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the overlay outline color.
    #[inline]
    pub fn highlight(mut self, rgb: [u8; 3]) -> Self {
        self.highlight = rgb;
        self
    }

    /// Set the mask resampling method.
    #[inline]
    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }
}
