#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! mask-roi: mask application and region-of-interest extraction
//!
//! This library restricts grayscale images (chest X-rays in the dataset this
//! was written for) to a segmented region. Two pixel-selection strategies are
//! provided:
//!
//! - **Direct selection** ([`apply_mask`], [`apply_mask_resized`]): a pixel is
//!   kept wherever the mask is non-zero. The mask is resampled with
//!   nearest-neighbor so no intermediate grey values appear at its edges.
//! - **Contour fill** ([`RoiExtractor`]): the external contours of the mask are
//!   traced, burned onto a blank canvas and filled, and the filled region is
//!   used as the selector.
//!
//! # Quick Start
//!
//! ```
//! use image::{GrayImage, Luma};
//! use mask_roi::{RoiExtractor, RoiOptions};
//!
//! let image = GrayImage::from_pixel(8, 8, Luma([200]));
//! let mut mask = GrayImage::new(4, 4);
//! for y in 1..3 {
//!     for x in 1..3 {
//!         mask.put_pixel(x, y, Luma([255]));
//!     }
//! }
//!
//! let result = RoiExtractor::new(RoiOptions::default())
//!     .extract(&image, &mask)
//!     .unwrap();
//!
//! assert_eq!(result.roi().dimensions(), (8, 8));
//! assert_eq!(result.roi().get_pixel(0, 0)[0], 0);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! image + mask (any size)
//!     |
//!     v
//! resize mask to image size     (linear for contour tracing)
//!     |
//!     v
//! external contours             (holes are not tracked)
//!     |
//!     +---> overlay             (outline drawn on an RGB copy)
//!     |
//!     v
//! outline + interior fill       (region mask, 255 inside)
//!     |
//!     v
//! image AND region mask         (ROI)
//! ```
//!
//! Because only external contours are filled, a ring-shaped mask produces a
//! solid region: the hole is part of the ROI.
//!
//! # Quality Metrics
//!
//! [`QualityMetrics`] collects the per-image statistics used to screen a
//! dataset (mean, variance, Laplacian blurriness, contrast, entropy), and
//! [`has_black_frame`] flags scans with a dark border.

pub mod api;
pub mod contour;
pub mod masking;
pub mod metrics;
pub mod output;
pub mod preprocess;

#[cfg(test)]
mod domain_tests;

pub use api::{extract_roi, MaskError, RoiExtractor, RoiOptions};
pub use contour::{draw_contours, fill_contours, find_external_contours, Contour, Point};
pub use masking::{apply_mask, apply_mask_resized, coverage};
pub use metrics::{has_black_frame, QualityMetrics};
pub use output::RoiResult;
pub use preprocess::{resize_image, resize_mask, Interpolation, ParseInterpolationError};
