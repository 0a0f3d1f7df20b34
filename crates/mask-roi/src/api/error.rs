//! Error type for the mask-roi public API.

use thiserror::Error;

/// Errors returned by the masking and extraction operations.
///
/// Resampling and tracing themselves cannot fail; only malformed inputs
/// are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    /// Mask and image differ in size where an exact match is required
    #[error("mask is {mask_width}x{mask_height} but image is {image_width}x{image_height}")]
    DimensionMismatch {
        image_width: u32,
        image_height: u32,
        mask_width: u32,
        mask_height: u32,
    },

    /// An input has zero width or height
    #[error("{role} has no pixels ({width}x{height})")]
    EmptyImage {
        role: &'static str,
        width: u32,
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let error = MaskError::DimensionMismatch {
            image_width: 299,
            image_height: 299,
            mask_width: 256,
            mask_height: 256,
        };
        assert_eq!(error.to_string(), "mask is 256x256 but image is 299x299");
    }

    #[test]
    fn test_empty_image_message() {
        let error = MaskError::EmptyImage {
            role: "mask",
            width: 0,
            height: 12,
        };
        assert_eq!(error.to_string(), "mask has no pixels (0x12)");
    }
}
