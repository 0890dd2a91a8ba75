//! Drawing surface abstraction.
//!
//! The renderer only needs four primitives; anything that can clear a
//! region and fill rectangles, closed polygons and circular arcs can host
//! an identicon.

use crate::color::Color;

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position (grows downward)
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `angle` (radians).
    #[inline]
    pub fn polar_offset(self, radius: f64, angle: f64) -> Self {
        Self::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Create a rectangle
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Square of side `size` centered on `center`.
    pub fn centered(center: Point, size: f64) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }
}

/// A 2D raster target of known pixel size.
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Reset a region to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Fill a circular arc from `start` to `end` (radians, clockwise in
    /// screen space), closed by the chord between its endpoints.
    fn fill_arc(&mut self, center: Point, radius: f64, start: f64, end: f64, color: Color);

    /// Reset the whole surface.
    fn clear(&mut self) {
        let rect = Rect::new(0.0, 0.0, self.width() as f64, self.height() as f64);
        self.clear_rect(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rect_centered() {
        let rect = Rect::centered(Point::new(10.0, 20.0), 8.0);
        assert_eq!(rect, Rect::new(6.0, 16.0, 8.0, 8.0));
    }

    #[test]
    fn test_polar_offset() {
        let p = Point::new(1.0, 1.0).polar_offset(2.0, FRAC_PI_2);
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 3.0).abs() < 1e-12);
    }
}
