//! Stroking and filling contours.

use std::collections::HashSet;

use image::{GrayImage, Luma};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_line_segment_mut, BresenhamLineIter, Canvas,
};
use imageproc::region_labelling::{connected_components, Connectivity};

use super::{Contour, Point};

/// Stroke the outline of every contour onto `canvas`.
///
/// Each vertex is joined to the next (and the last back to the first) with
/// a line segment. Thickness 1 gives a 1-pixel 8-connected outline; thicker
/// outlines stamp a filled circle of radius `thickness / 2` on every line
/// pixel. Pixels falling outside the canvas are clipped.
pub fn draw_contours<C>(canvas: &mut C, contours: &[Contour], color: C::Pixel, thickness: u32)
where
    C: Canvas,
{
    let radius = stroke_radius(thickness);
    for contour in contours {
        stroke_polygon(canvas, contour.points(), color, radius);
    }
}

/// Set every pixel enclosed by each contour (outline included) to `value`.
///
/// Contours are filled independently, so the gap between two separate
/// regions is never filled. Holes inside a region are filled, since only the
/// outer boundary is known.
pub fn fill_contours(canvas: &mut GrayImage, contours: &[Contour], value: u8) {
    for contour in contours {
        fill_contour(canvas, contour, value);
    }
}

fn stroke_radius(thickness: u32) -> i32 {
    (thickness.max(1) / 2) as i32
}

fn as_f32(p: Point<i32>) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

fn stroke_polygon<C>(canvas: &mut C, points: &[Point<i32>], color: C::Pixel, radius: i32)
where
    C: Canvas,
{
    let Some(&first) = points.first() else {
        return;
    };

    if radius == 0 {
        // A lone vertex has no segment to draw
        let (width, height) = canvas.dimensions();
        if first.x >= 0 && first.y >= 0 && (first.x as u32) < width && (first.y as u32) < height {
            canvas.draw_pixel(first.x as u32, first.y as u32, color);
        }
        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            draw_line_segment_mut(canvas, as_f32(from), as_f32(to), color);
        }
        return;
    }

    for (i, &from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        draw_filled_circle_mut(canvas, (to.x, to.y), radius, color);
        for center in BresenhamLineIter::new(as_f32(from), as_f32(to)) {
            draw_filled_circle_mut(canvas, center, radius, color);
        }
    }
}

/// Fill one contour by labelling the open space around its 1-pixel outline.
///
/// The outline is drawn on a scratch canvas covering the contour's bounding
/// box plus a one-pixel frame. Open components touching the frame are
/// outside; the outline and every other component are inside.
fn fill_contour(canvas: &mut GrayImage, contour: &Contour, value: u8) {
    let Some((min, max)) = contour.bounds() else {
        return;
    };
    let origin = Point::new(min.x - 1, min.y - 1);
    let width = (max.x - min.x + 3) as u32;
    let height = (max.y - min.y + 3) as u32;

    let local: Vec<Point<i32>> = contour
        .points()
        .iter()
        .map(|p| Point::new(p.x - origin.x, p.y - origin.y))
        .collect();

    const OPEN: Luma<u8> = Luma([u8::MAX]);
    const WALL: Luma<u8> = Luma([0]);
    let mut scratch = GrayImage::from_pixel(width, height, OPEN);
    stroke_polygon(&mut scratch, &local, WALL, 0);

    // Walls are background (label 0); open space is labelled 4-connected so
    // an 8-connected outline cannot be crossed diagonally.
    let labels = connected_components(&scratch, Connectivity::Four, WALL);

    let mut outside: HashSet<u32> = HashSet::new();
    for x in 0..width {
        outside.insert(labels.get_pixel(x, 0)[0]);
        outside.insert(labels.get_pixel(x, height - 1)[0]);
    }
    for y in 0..height {
        outside.insert(labels.get_pixel(0, y)[0]);
        outside.insert(labels.get_pixel(width - 1, y)[0]);
    }
    outside.remove(&0);

    let (canvas_width, canvas_height) = canvas.dimensions();
    for (x, y, label) in labels.enumerate_pixels() {
        if outside.contains(&label[0]) {
            continue;
        }
        let gx = x as i32 + origin.x;
        let gy = y as i32 + origin.y;
        if gx >= 0 && gy >= 0 && (gx as u32) < canvas_width && (gy as u32) < canvas_height {
            canvas.put_pixel(gx as u32, gy as u32, Luma([value]));
        }
    }
}
