//! Clip windows for selecting part of a generated patch

use crate::lattice::point::Point;

/// Inclusive rectangle in the planar functionals `(2x + y, y)`
///
/// Lattice x is skewed against y, so axis-aligned bounds are stored as
/// limits on `2x + y` and `y` directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipRect {
    /// Minimum of `2x + y`
    pub x_min: i32,
    /// Maximum of `2x + y`
    pub x_max: i32,
    /// Minimum of `y`
    pub y_min: i32,
    /// Maximum of `y`
    pub y_max: i32,
}

impl ClipRect {
    /// Create a window from inclusive planar limits
    pub const fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Window spanned by a lower-left and an upper-right lattice point
    pub const fn from_corners(lo: Point, hi: Point) -> Self {
        Self::new(lo.planar_x(), hi.planar_x(), lo.planar_y(), hi.planar_y())
    }

    /// Smallest window containing every given point, if any
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let seed = Self::new(
            first.planar_x(),
            first.planar_x(),
            first.planar_y(),
            first.planar_y(),
        );
        Some(points.iter().fold(seed, |rect, p| Self {
            x_min: rect.x_min.min(p.planar_x()),
            x_max: rect.x_max.max(p.planar_x()),
            y_min: rect.y_min.min(p.planar_y()),
            y_max: rect.y_max.max(p.planar_y()),
        }))
    }

    /// Extent along `2x + y`
    pub const fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    /// Extent along `y`
    pub const fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    /// Whether a lattice point lies inside the window, edges included
    pub const fn contains(&self, p: Point) -> bool {
        let x = p.planar_x();
        let y = p.planar_y();
        y >= self.y_min && y <= self.y_max && x >= self.x_min && x <= self.x_max
    }

    /// Whether every point of a polygon lies inside the window
    pub fn contains_all(&self, points: &[Point]) -> bool {
        points.iter().all(|&p| self.contains(p))
    }
}
