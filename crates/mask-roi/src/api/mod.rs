//! Public API for the mask-roi crate.
//!
//! This module provides the high-level API: the [`RoiExtractor`] entry
//! point, its [`RoiOptions`] configuration and the [`MaskError`] type.

mod error;
mod extractor;
mod options;

pub use error::MaskError;
pub use extractor::{extract_roi, RoiExtractor};
pub use options::RoiOptions;
