//! Output types for the ROI pipeline.
//!
//! [`RoiResult`] carries every artifact produced by
//! [`RoiExtractor::extract`](crate::RoiExtractor::extract):
//!
//! - **ROI** ([`RoiResult::roi`]): image pixels inside the filled contours
//! - **Region mask** ([`RoiResult::region_mask`]): the binary selector
//! - **Overlay** ([`RoiResult::overlay`]): image with contours drawn on top
//! - **Resized mask** and **contours** for inspection

mod roi_result;

pub use roi_result::RoiResult;
