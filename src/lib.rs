//! cxr-prep - chest X-ray dataset preparation
//!
//! Batch mask application, contour-based ROI extraction, folder
//! downscaling and image quality metrics. The image algorithms live in the
//! `mask-roi` crate; this crate adds configuration, file pairing, batch
//! processing and the command line.

pub mod error;
pub mod models;
pub mod services;
