//! Assertion helpers for tests.

use std::path::Path;

use image::GrayImage;
use pretty_assertions::assert_eq;

/// Assert `path` exists and starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected file at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG at {}, got {} bytes starting with {:?}",
        path.display(),
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert `output` is `image` where `mask` is non-zero and 0 elsewhere
pub fn assert_masked(output: &GrayImage, image: &GrayImage, mask: &GrayImage) {
    assert_eq!(output.dimensions(), image.dimensions(), "output size");
    assert_eq!(mask.dimensions(), image.dimensions(), "mask size");

    for (x, y, p) in output.enumerate_pixels() {
        let expected = if mask.get_pixel(x, y)[0] > 0 {
            image.get_pixel(x, y)[0]
        } else {
            0
        };
        assert_eq!(p[0], expected, "pixel ({x}, {y})");
    }
}

/// Assert every pixel of `image` is 0
pub fn assert_all_black(image: &GrayImage) {
    let lit = image.pixels().filter(|p| p[0] != 0).count();
    assert_eq!(lit, 0, "Expected an all-black image");
}
