//! Synthetic images and file names.

use image::{GrayImage, Luma};

/// File names shaped like the COVID-19 radiography dataset
pub mod names {
    pub const COVID: &str = "COVID-1.png";
    pub const NORMAL: &str = "Normal-12.png";
    pub const OPACITY: &str = "Lung_Opacity-3.png";
    pub const PNEUMONIA: &str = "Viral Pneumonia-101.png";
    pub const JPEG: &str = "Normal-13.jpg";
}

/// Non-zero texture so masked-out pixels are distinguishable from kept ones
pub fn textured(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        Luma([(((x * 31) ^ (y * 13)) % 250) as u8 + 3])
    })
}

/// Checkerboard mask with `cell`-pixel squares, 255 on even cells
pub fn checkerboard(width: u32, height: u32, cell: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        Luma([if (x / cell + y / cell) % 2 == 0 { 255 } else { 0 }])
    })
}

/// Two elliptical lobes, roughly like a lung segmentation
pub fn lobes(width: u32, height: u32) -> GrayImage {
    let (w, h) = (width as f64, height as f64);
    GrayImage::from_fn(width, height, |x, y| {
        let (x, y) = (x as f64, y as f64);
        let lobe = |cx: f64| ((x - cx) / (w * 0.18)).powi(2) + ((y - h * 0.5) / (h * 0.35)).powi(2);
        Luma([if lobe(w * 0.3) <= 1.0 || lobe(w * 0.7) <= 1.0 { 255 } else { 0 }])
    })
}

/// Image with a dark `border`-pixel frame around a bright center
pub fn framed(width: u32, height: u32, border: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let inside = x >= border && y >= border && x < width - border && y < height - border;
        Luma([if inside { 200 } else { 2 }])
    })
}
