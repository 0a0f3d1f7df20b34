//! Border following on binary masks.

use std::collections::HashMap;

use image::{GrayImage, Luma};
use imageproc::contours::find_contours;
use imageproc::definitions::Image;
use imageproc::region_labelling::{connected_components, Connectivity};

use super::raster::fill_contours;
use super::{Contour, Point};

/// One 8-connected foreground region of a mask.
struct Region {
    label: u32,
    /// First pixel in raster order
    start: Point<i32>,
    min: Point<i32>,
    max: Point<i32>,
}

/// Trace the external contours of the non-zero regions of `mask`.
///
/// Regions are the 8-connected components of the non-zero pixels, in raster
/// order of their first pixel. A region lying inside a hole of an earlier
/// region is nested and dropped, so only outermost boundaries are returned.
/// Each contour is reduced to the vertices where the boundary changes
/// direction.
///
/// An all-zero mask yields no contours.
pub fn find_external_contours(mask: &GrayImage) -> Vec<Contour> {
    let binary = GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        Luma([if mask.get_pixel(x, y)[0] > 0 { u8::MAX } else { 0 }])
    });
    let labels = connected_components(&binary, Connectivity::Eight, Luma([0]));

    // Filled area of every region kept so far
    let mut covered = GrayImage::new(mask.width(), mask.height());
    let mut contours = Vec::new();

    for region in regions_in_scan_order(&labels) {
        if covered.get_pixel(region.start.x as u32, region.start.y as u32)[0] > 0 {
            continue;
        }
        let contour = Contour::new(collapse_straight_runs(&trace_region(&labels, &region)));
        fill_contours(&mut covered, std::slice::from_ref(&contour), u8::MAX);
        contours.push(contour);
    }
    contours
}

fn regions_in_scan_order(labels: &Image<Luma<u32>>) -> Vec<Region> {
    let mut regions: Vec<Region> = Vec::new();
    // label -> index into `regions`
    let mut index = HashMap::new();

    for (x, y, label) in labels.enumerate_pixels() {
        let label = label[0];
        if label == 0 {
            continue;
        }
        let p = Point::new(x as i32, y as i32);
        let i = *index.entry(label).or_insert_with(|| {
            regions.push(Region {
                label,
                start: p,
                min: p,
                max: p,
            });
            regions.len() - 1
        });
        let region = &mut regions[i];
        region.min = Point::new(region.min.x.min(p.x), region.min.y.min(p.y));
        region.max = Point::new(region.max.x.max(p.x), region.max.y.max(p.y));
    }
    regions
}

/// Outer border of one region, in mask coordinates.
///
/// The region is copied alone onto a canvas of its bounding box plus a
/// one-pixel empty frame, so it never touches the canvas edge. Its outer
/// border is the first border met in raster order and spans the whole
/// bounding box.
fn trace_region(labels: &Image<Luma<u32>>, region: &Region) -> Vec<Point<i32>> {
    let origin = Point::new(region.min.x - 1, region.min.y - 1);
    let width = (region.max.x - region.min.x + 3) as u32;
    let height = (region.max.y - region.min.y + 3) as u32;

    let local = GrayImage::from_fn(width, height, |x, y| {
        let gx = x as i32 + origin.x;
        let gy = y as i32 + origin.y;
        let inside = gx >= region.min.x
            && gy >= region.min.y
            && gx <= region.max.x
            && gy <= region.max.y
            && labels.get_pixel(gx as u32, gy as u32)[0] == region.label;
        Luma([if inside { u8::MAX } else { 0 }])
    });

    let spans_region = |points: &[Point<i32>]| {
        Contour::new(points.to_vec()).bounds()
            == Some((
                Point::new(region.min.x - origin.x, region.min.y - origin.y),
                Point::new(region.max.x - origin.x, region.max.y - origin.y),
            ))
    };

    let borders = find_contours::<i32>(&local);
    let outer = borders
        .iter()
        .find(|b| spans_region(&b.points))
        .or_else(|| borders.first());

    match outer {
        Some(border) => border
            .points
            .iter()
            .map(|p| Point::new(p.x + origin.x, p.y + origin.y))
            .collect(),
        None => vec![region.start],
    }
}

/// Drop boundary points that sit in the middle of a straight run.
///
/// A point is kept when the step arriving at it differs from the step
/// leaving it. The traced boundary is 8-connected, so every run between two
/// kept points is a pure horizontal, vertical or diagonal line and is
/// reproduced exactly when the vertices are joined again.
fn collapse_straight_runs(points: &[Point<i32>]) -> Vec<Point<i32>> {
    // Closed loop without repeated neighbours (the tracer may close on its start)
    let mut points: Vec<Point<i32>> = points.iter().fold(Vec::new(), |mut acc, &p| {
        if acc.last() != Some(&p) {
            acc.push(p);
        }
        acc
    });
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    let n = points.len();
    if n < 3 {
        return points;
    }

    let step = |from: Point<i32>, to: Point<i32>| {
        ((to.x - from.x).signum(), (to.y - from.y).signum())
    };

    let kept: Vec<Point<i32>> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let here = points[i];
            let next = points[(i + 1) % n];
            step(prev, here) != step(here, next)
        })
        .map(|i| points[i])
        .collect();

    if kept.is_empty() {
        vec![points[0]]
    } else {
        kept
    }
}
