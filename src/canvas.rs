//! In-memory RGBA raster surface.
//!
//! Pixels are sampled at their centers: a pixel is painted when
//! `(x + 0.5, y + 0.5)` lies inside the shape. Polygons use the even-odd
//! rule. No anti-aliasing, so output is exact and reproducible.

use std::f64::consts::{PI, TAU};
use std::ops::Range;

use smallvec::SmallVec;

use crate::color::Color;
use crate::surface::{Point, Rect, Surface};

/// A cleared pixel.
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Angular step used when flattening partial arcs.
const ARC_STEP: f64 = PI / 32.0;

/// RGBA8 pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Create a transparent square canvas.
    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get a pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
        } else {
            None
        }
    }

    /// Set a pixel; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.data[i..i + 4].copy_from_slice(&rgba);
        }
    }

    /// Number of pixels that are not transparent.
    pub fn painted_pixels(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * 4
    }

    fn fill_span(&mut self, y: u32, xs: Range<u32>, rgba: [u8; 4]) {
        for x in xs {
            self.set_pixel(x, y, rgba);
        }
    }

    fn fill_disk(&mut self, center: Point, radius: f64, rgba: [u8; 4]) {
        let r2 = radius * radius;
        for y in span(center.y - radius, center.y + radius, self.height) {
            let dy = y as f64 + 0.5 - center.y;
            for x in span(center.x - radius, center.x + radius, self.width) {
                let dx = x as f64 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(x, y, rgba);
                }
            }
        }
    }
}

/// Pixels whose centers fall in `[lo, hi)`, clamped to `0..limit`.
fn span(lo: f64, hi: f64, limit: u32) -> Range<u32> {
    let clamp = |v: f64| (v - 0.5).ceil().clamp(0.0, limit as f64) as u32;
    clamp(lo)..clamp(hi)
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_rect(&mut self, rect: Rect) {
        for y in span(rect.y, rect.y + rect.height, self.height) {
            self.fill_span(y, span(rect.x, rect.x + rect.width, self.width), TRANSPARENT);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rgba = color.to_rgba();
        for y in span(rect.y, rect.y + rect.height, self.height) {
            self.fill_span(y, span(rect.x, rect.x + rect.width, self.width), rgba);
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        let rgba = color.to_rgba();
        let (min_y, max_y) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));

        let mut crossings: SmallVec<[f64; 8]> = SmallVec::new();
        for y in span(min_y, max_y, self.height) {
            let scan = y as f64 + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= scan) != (b.y <= scan) {
                    crossings.push(a.x + (scan - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                self.fill_span(y, span(pair[0], pair[1], self.width), rgba);
            }
        }
    }

    fn fill_arc(&mut self, center: Point, radius: f64, start: f64, end: f64, color: Color) {
        let sweep = end - start;
        if sweep.abs() >= TAU {
            self.fill_disk(center, radius, color.to_rgba());
            return;
        }

        let steps = ((sweep.abs() / ARC_STEP).ceil() as usize).max(1);
        let points: Vec<Point> = (0..=steps)
            .map(|i| center.polar_offset(radius, start + sweep * i as f64 / steps as f64))
            .collect();
        self.fill_polygon(&points, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::square(4);
        assert_eq!(canvas.as_bytes().len(), 64);
        assert_eq!(canvas.painted_pixels(), 0);
        assert_eq!(canvas.pixel(3, 3), Some(TRANSPARENT));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_rect_exact_pixels() {
        let mut canvas = Canvas::square(4);
        canvas.fill_rect(Rect::new(1.0, 1.0, 2.0, 2.0), RED);
        assert_eq!(canvas.painted_pixels(), 4);
        assert_eq!(canvas.pixel(1, 1), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(0, 0), Some(TRANSPARENT));
        assert_eq!(canvas.pixel(3, 3), Some(TRANSPARENT));
    }

    #[test]
    fn test_fill_rect_clips_to_canvas() {
        let mut canvas = Canvas::square(4);
        canvas.fill_rect(Rect::new(-10.0, -10.0, 100.0, 100.0), RED);
        assert_eq!(canvas.painted_pixels(), 16);
    }

    #[test]
    fn test_clear_rect() {
        let mut canvas = Canvas::square(4);
        canvas.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), RED);
        canvas.clear_rect(Rect::new(0.0, 0.0, 2.0, 4.0));
        assert_eq!(canvas.painted_pixels(), 8);
        canvas.clear();
        assert_eq!(canvas.painted_pixels(), 0);
    }

    #[test]
    fn test_fill_polygon_triangle() {
        let mut canvas = Canvas::square(10);
        // Lower-left half of the canvas
        let tri = [Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(0.0, 10.0)];
        canvas.fill_polygon(&tri, RED);
        // Row y scans at y + 0.5 and covers pixel centers in [0, y + 0.5)
        assert_eq!(canvas.painted_pixels(), (0..10).sum::<usize>());
        assert_eq!(canvas.pixel(0, 9), Some(RED.to_rgba()));
        assert_eq!(canvas.pixel(9, 0), Some(TRANSPARENT));
    }

    #[test]
    fn test_fill_polygon_degenerate() {
        let mut canvas = Canvas::square(4);
        canvas.fill_polygon(&[Point::new(0.0, 0.0), Point::new(4.0, 4.0)], RED);
        assert_eq!(canvas.painted_pixels(), 0);
    }

    #[test]
    fn test_fill_full_arc_is_disk() {
        let mut canvas = Canvas::square(20);
        canvas.fill_arc(Point::new(10.0, 10.0), 5.0, 0.0, TAU, RED);
        assert_eq!(canvas.pixel(10, 10), Some(RED.to_rgba()));
        assert_eq!(canvas.pixel(0, 0), Some(TRANSPARENT));
        // Bounding-box corners of the disk stay empty
        assert_eq!(canvas.pixel(5, 5), Some(TRANSPARENT));
        let area = canvas.painted_pixels() as f64;
        assert!((area - PI * 25.0).abs() < 10.0);
    }

    #[test]
    fn test_fill_half_arc_is_chord_segment() {
        let mut canvas = Canvas::square(20);
        // Lower half (screen y grows downward)
        canvas.fill_arc(Point::new(10.0, 10.0), 8.0, 0.0, PI, RED);
        assert_eq!(canvas.pixel(10, 14), Some(RED.to_rgba()));
        assert_eq!(canvas.pixel(10, 6), Some(TRANSPARENT));
    }
}
