//! A surface that records draw calls instead of rasterizing them.

use smallvec::SmallVec;

use crate::color::Color;
use crate::surface::{Point, Rect, Surface};

/// One primitive call made against a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// `clear_rect`
    Clear {
        /// Cleared region
        rect: Rect,
    },
    /// `fill_rect`
    FillRect {
        /// Filled region
        rect: Rect,
        /// Fill color
        color: Color,
    },
    /// `fill_polygon`
    FillPolygon {
        /// Polygon vertices in drawing order
        points: SmallVec<[Point; 8]>,
        /// Fill color
        color: Color,
    },
    /// `fill_arc`
    FillArc {
        /// Arc center
        center: Point,
        /// Arc radius
        radius: f64,
        /// Start angle, radians
        start: f64,
        /// End angle, radians
        end: f64,
        /// Fill color
        color: Color,
    },
}

impl DrawCall {
    /// Fill color, `None` for clears.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Clear { .. } => None,
            Self::FillRect { color, .. }
            | Self::FillPolygon { color, .. }
            | Self::FillArc { color, .. } => Some(*color),
        }
    }

    /// Whether this call paints pixels.
    pub fn is_fill(&self) -> bool {
        !matches!(self, Self::Clear { .. })
    }
}

/// In-order log of every call made against it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Create an empty recorder reporting the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// Recorded calls, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of calls that painted pixels.
    pub fn fill_count(&self) -> usize {
        self.calls.iter().filter(|c| c.is_fill()).count()
    }

    /// Drop all recorded calls.
    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::Clear { rect });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.calls.push(DrawCall::FillPolygon {
            points: SmallVec::from_slice(points),
            color,
        });
    }

    fn fill_arc(&mut self, center: Point, radius: f64, start: f64, end: f64, color: Color) {
        self.calls.push(DrawCall::FillArc {
            center,
            radius,
            start,
            end,
            color,
        });
    }
}
