//! External contours of binary masks and their rasterization.
//!
//! - [`find_external_contours`] traces the outermost boundary of every
//!   connected non-zero region and collapses straight runs to their end
//!   points.
//! - [`draw_contours`] strokes contour outlines at a given thickness onto any
//!   image type (grey region masks, RGB overlays).
//! - [`fill_contours`] fills everything enclosed by each contour.

mod raster;
mod trace;

pub use imageproc::point::Point;
pub use raster::{draw_contours, fill_contours};
pub use trace::find_external_contours;

/// One closed external boundary, as an ordered list of polygon vertices.
///
/// Consecutive vertices are joined by straight 8-connected lines, and the
/// last vertex connects back to the first. A region of a single pixel has a
/// single vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    points: Vec<Point<i32>>,
}

impl Contour {
    /// Build a contour from polygon vertices in drawing order.
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    /// Polygon vertices in drawing order.
    #[inline]
    pub fn points(&self) -> &[Point<i32>] {
        &self.points
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Inclusive bounding box as `(min, max)` corners, `None` when empty.
    pub fn bounds(&self) -> Option<(Point<i32>, Point<i32>)> {
        let first = *self.points.first()?;
        let (min, max) = self.points.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some((min, max))
    }
}
