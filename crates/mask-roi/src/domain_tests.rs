//! Domain regression tests for mask-roi.
//!
//! Each test pins one property the dataset pipeline relies on and documents
//! what it means when it breaks.

#[cfg(test)]
mod domain_tests {
    use std::collections::VecDeque;

    use image::{GrayImage, Luma};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::api::{RoiExtractor, RoiOptions};
    use crate::masking::{apply_mask, apply_mask_resized, coverage};
    use crate::preprocess::{resize_mask, Interpolation};

    fn textured(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| {
            Luma([(((x * 37) ^ (y * 17)) % 254) as u8 + 1])
        })
    }

    /// Two lobes, roughly like a lung-field segmentation.
    fn lobes_mask(width: u32, height: u32) -> GrayImage {
        let (w, h) = (width as f64, height as f64);
        GrayImage::from_fn(width, height, |x, y| {
            let (x, y) = (x as f64, y as f64);
            let left = ((x - w * 0.3) / (w * 0.18)).powi(2) + ((y - h * 0.5) / (h * 0.35)).powi(2);
            let right = ((x - w * 0.7) / (w * 0.18)).powi(2) + ((y - h * 0.5) / (h * 0.35)).powi(2);
            if left <= 1.0 || right <= 1.0 {
                Luma([255])
            } else {
                Luma([0])
            }
        })
    }

    /// Square dilation of a binary mask (Chebyshev distance <= radius).
    fn dilate(mask: &GrayImage, radius: u32) -> GrayImage {
        let (width, height) = mask.dimensions();
        let r = radius as i64;
        GrayImage::from_fn(width, height, |x, y| {
            for dy in -r..=r {
                for dx in -r..=r {
                    let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                    if nx >= 0
                        && ny >= 0
                        && nx < width as i64
                        && ny < height as i64
                        && mask.get_pixel(nx as u32, ny as u32)[0] > 0
                    {
                        return Luma([255]);
                    }
                }
            }
            Luma([0])
        })
    }

    // ========================================================================
    // Region mask stays within the segmented area
    // ========================================================================

    /// If this breaks, it means: contour filling leaks outside the segmented
    /// region (e.g. the exterior is flooded through a diagonal gap, or the gap
    /// between two lobes is filled), so background anatomy ends up in the ROI.
    #[test]
    fn test_region_mask_is_within_dilated_mask() {
        let mask = lobes_mask(64, 48);
        let image = textured(64, 48);

        for thickness in [1, 2, 3, 5] {
            let result = RoiExtractor::default()
                .thickness(thickness)
                .extract(&image, &mask)
                .unwrap();
            let allowed = dilate(&mask, thickness);

            assert!(result.region_coverage() >= coverage(&mask));
            for (x, y, p) in result.region_mask().enumerate_pixels() {
                if p[0] > 0 {
                    assert!(
                        allowed.get_pixel(x, y)[0] > 0,
                        "REGRESSION: region pixel ({x}, {y}) outside the mask dilated by {thickness}"
                    );
                }
            }
        }
    }

    /// If this breaks, it means: the fill step lost interior pixels, so the
    /// ROI is missing parts of the segmented region.
    #[test]
    fn test_region_mask_covers_original_mask() {
        let mask = lobes_mask(80, 60);
        let image = textured(80, 60);

        let result = RoiExtractor::default().extract(&image, &mask).unwrap();

        assert_eq!(result.contours().len(), 2, "one contour per lobe");
        for (x, y, p) in mask.enumerate_pixels() {
            if p[0] > 0 {
                assert!(
                    result.region_mask().get_pixel(x, y)[0] > 0,
                    "REGRESSION: mask pixel ({x}, {y}) missing from region mask"
                );
            }
        }
        // The space between the lobes stays outside
        assert_eq!(result.region_mask().get_pixel(40, 30)[0], 0);
    }

    /// Mask with its holes filled: every zero pixel that cannot reach the
    /// image border through 4-connected zero pixels is set.
    fn fill_holes(mask: &GrayImage) -> GrayImage {
        let (width, height) = mask.dimensions();
        let mut outside = GrayImage::new(width, height);
        let mut queue = VecDeque::new();
        for (x, y, p) in mask.enumerate_pixels() {
            let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            if on_border && p[0] == 0 {
                outside.put_pixel(x, y, Luma([255]));
                queue.push_back((x, y));
            }
        }
        while let Some((x, y)) = queue.pop_front() {
            let neighbours = [
                (x.wrapping_sub(1), y),
                (x + 1, y),
                (x, y.wrapping_sub(1)),
                (x, y + 1),
            ];
            for (nx, ny) in neighbours {
                if nx < width
                    && ny < height
                    && mask.get_pixel(nx, ny)[0] == 0
                    && outside.get_pixel(nx, ny)[0] == 0
                {
                    outside.put_pixel(nx, ny, Luma([255]));
                    queue.push_back((nx, ny));
                }
            }
        }
        GrayImage::from_fn(width, height, |x, y| {
            Luma([if outside.get_pixel(x, y)[0] == 0 { 255 } else { 0 }])
        })
    }

    fn random_mask(rng: &mut StdRng, width: u32, height: u32) -> GrayImage {
        let density = rng.gen_range(0.1..0.6);
        GrayImage::from_fn(width, height, |_, _| {
            Luma([if rng.gen_bool(density) { rng.gen_range(1..=255) } else { 0 }])
        })
    }

    /// If this breaks, it means: a region touching the left image edge is
    /// misread as a hole and dropped, so its pixels vanish from the ROI.
    #[test]
    fn test_region_on_left_edge_is_kept() {
        let image = textured(12, 12);
        let mask = GrayImage::from_fn(12, 12, |x, y| {
            Luma([if x < 4 && (3..7).contains(&y) { 255 } else { 0 }])
        });

        let result = RoiExtractor::default().extract(&image, &mask).unwrap();

        assert_eq!(result.contours().len(), 1);
        assert_eq!(result.region_mask(), &mask);
        assert_eq!(result.roi(), &apply_mask(&image, &mask).unwrap());
    }

    /// If this breaks, it means: some mask shapes (edge-touching, speckled,
    /// nested) lose pixels in the region mask, or the fill leaks beyond the
    /// mask's filled holes plus the outline thickness.
    #[test]
    fn test_random_masks_region_bounds() {
        let mut rng = StdRng::seed_from_u64(0x5eed_c0de);
        let image = textured(24, 20);

        for round in 0..200 {
            let mask = random_mask(&mut rng, 24, 20);
            let solid = fill_holes(&mask);

            for thickness in [1, 3] {
                let result = RoiExtractor::default()
                    .thickness(thickness)
                    .extract(&image, &mask)
                    .unwrap();
                let allowed = dilate(&solid, thickness);

                for (x, y, p) in mask.enumerate_pixels() {
                    let region = result.region_mask().get_pixel(x, y)[0];
                    assert!(
                        p[0] == 0 || region > 0,
                        "REGRESSION: round {round}, thickness {thickness}: mask pixel ({x}, {y}) missing from region"
                    );
                    assert!(
                        region == 0 || allowed.get_pixel(x, y)[0] > 0,
                        "REGRESSION: round {round}, thickness {thickness}: region pixel ({x}, {y}) outside bounds"
                    );
                }
            }
        }
    }

    // ========================================================================
    // Degenerate masks
    // ========================================================================

    /// If this breaks, it means: an empty segmentation is treated as an error
    /// or produces stray pixels instead of a black image.
    #[test]
    fn test_all_zero_mask_gives_black_roi() {
        let image = textured(30, 20);
        let mask = GrayImage::new(15, 10);

        let result = RoiExtractor::default().extract(&image, &mask).unwrap();

        assert!(result.contours().is_empty());
        assert_eq!(result.roi().dimensions(), (30, 20));
        assert_eq!(result.region_coverage(), 0);
        assert!(result.roi().pixels().all(|p| p[0] == 0));
    }

    /// If this breaks, it means: a full-coverage mask no longer round-trips,
    /// typically because border pixels are dropped when the contour runs
    /// along the image edge.
    #[test]
    fn test_full_mask_returns_image_unchanged() {
        let image = textured(33, 21);
        let mask = GrayImage::from_pixel(33, 21, Luma([255]));

        for thickness in [1, 4] {
            let options = RoiOptions::default().thickness(thickness);
            let result = RoiExtractor::new(options).extract(&image, &mask).unwrap();
            assert_eq!(result.roi(), &image);
        }
    }

    /// If this breaks, it means: the ring's hole is no longer filled, i.e.
    /// hole contours are being traced. The pipeline fills external contours
    /// only, so a donut mask selects a solid disc.
    #[test]
    fn test_ring_mask_is_filled_solid() {
        let mask = GrayImage::from_fn(40, 40, |x, y| {
            let d2 = (x as i64 - 20).pow(2) + (y as i64 - 20).pow(2);
            if (64..=225).contains(&d2) {
                Luma([255])
            } else {
                Luma([0])
            }
        });
        let image = textured(40, 40);

        let result = RoiExtractor::default().extract(&image, &mask).unwrap();

        assert_eq!(result.contours().len(), 1);
        assert_eq!(result.region_mask().get_pixel(20, 20)[0], 255);
        assert_eq!(result.roi().get_pixel(20, 20), image.get_pixel(20, 20));
    }

    // ========================================================================
    // Direct selection
    // ========================================================================

    /// If this breaks, it means: direct selection keeps or drops the wrong
    /// pixels, e.g. it thresholds at 128 instead of "non-zero".
    #[test]
    fn test_checkerboard_selection_is_exact() {
        let image = textured(24, 16);
        let mask = GrayImage::from_fn(24, 16, |x, y| {
            Luma([if (x / 3 + y / 3) % 2 == 0 { 255 } else { 0 }])
        });

        let out = apply_mask(&image, &mask).unwrap();

        for (x, y, p) in out.enumerate_pixels() {
            let expected = if mask.get_pixel(x, y)[0] > 0 {
                image.get_pixel(x, y)[0]
            } else {
                0
            };
            assert_eq!(p[0], expected, "pixel ({x}, {y})");
        }
    }

    /// If this breaks, it means: a low-resolution mask is resampled with a
    /// smoothing filter, which widens the selection with grey edge values.
    #[test]
    fn test_low_resolution_checkerboard_selection() {
        let image = textured(16, 16);
        let mask = GrayImage::from_fn(4, 4, |x, y| {
            Luma([if (x + y) % 2 == 0 { 255 } else { 0 }])
        });

        let out = apply_mask_resized(&image, &mask, Interpolation::Nearest);

        for (x, y, p) in out.enumerate_pixels() {
            let selected = (x / 4 + y / 4) % 2 == 0;
            let expected = if selected { image.get_pixel(x, y)[0] } else { 0 };
            assert_eq!(p[0], expected, "pixel ({x}, {y})");
        }
    }

    // ========================================================================
    // Resampling
    // ========================================================================

    /// If this breaks, it means: nearest-neighbor resampling is dropping or
    /// inventing mask pixels beyond what the scale change explains.
    #[test]
    fn test_nearest_round_trip_preserves_coverage() {
        let mask = lobes_mask(50, 40);
        let before = coverage(&mask) as f64;

        for (w, h) in [(100, 80), (150, 120), (75, 60)] {
            let up = resize_mask(&mask, w, h, Interpolation::Nearest);
            let back = resize_mask(&up, 50, 40, Interpolation::Nearest);

            assert!(back.pixels().all(|p| p[0] == 0 || p[0] == 255));
            let after = coverage(&back) as f64;
            let scale = (w as f64 / 50.0).max(50.0 / w as f64);
            // Boundary pixels may flip; the interior may not
            let tolerance = 0.05 * scale * before;
            assert!(
                (after - before).abs() <= tolerance,
                "REGRESSION: coverage {before} -> {after} at {w}x{h} (tolerance {tolerance})"
            );
        }
    }
}
