//! Resampling of images and masks.
//!
//! Masks rarely arrive at their image's resolution, so every pipeline
//! starts by resampling the mask to the image size. The method depends on
//! how the mask is used afterwards:
//!
//! - **Nearest** when the mask is a hard selector: no intermediate grey
//!   values are introduced, so "non-zero" keeps its meaning at the edges.
//! - **Linear** when the mask feeds contour tracing: the boundary is
//!   smoother and the tracer re-binarizes it anyway.
//!
//! Image downscaling defaults to **Area**, which averages every source
//! pixel covered by a destination pixel.
//!
//! # Example
//!
//! ```
//! use image::{GrayImage, Luma};
//! use mask_roi::{resize_mask, Interpolation};
//!
//! let mask = GrayImage::from_pixel(2, 2, Luma([255]));
//! let resized = resize_mask(&mask, 4, 4, Interpolation::Nearest);
//!
//! assert_eq!(resized.dimensions(), (4, 4));
//! assert!(resized.pixels().all(|p| p[0] == 255));
//! ```

mod options;
mod resize;

pub use options::{Interpolation, ParseInterpolationError};
pub use resize::{resize_image, resize_mask};
