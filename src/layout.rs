//! Pixel layout of the grid on a square surface.

use crate::error::{IdenticonError, IdenticonResult};
use crate::grid::Cell;
use crate::surface::Point;

/// Maps grid cells to pixel positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    width: f64,
    height: f64,
    cell_size: f64,
}

impl Layout {
    /// Create a layout for an N×N grid on a `width`×`height` surface.
    ///
    /// The surface must be square and non-empty.
    pub fn new(grid_size: usize, width: u32, height: u32) -> IdenticonResult<Self> {
        if width == 0 || height == 0 || width != height {
            return Err(IdenticonError::InvalidSurface { width, height });
        }
        let width = width as f64;
        Ok(Self {
            width,
            height: height as f64,
            cell_size: width / grid_size as f64,
        })
    }

    /// Side length of one cell, `W / N`.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Pixel center of a cell.
    #[inline]
    pub fn cell_center(&self, cell: Cell) -> Point {
        let s = self.cell_size;
        Point::new(cell.col as f64 * s + s / 2.0, cell.row as f64 * s + s / 2.0)
    }

    /// Pixel center of the surface.
    #[inline]
    pub fn canvas_center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Angle from the cell to the canvas center.
    pub fn rotation(&self, cell: Cell) -> f64 {
        let at = self.cell_center(cell);
        let center = self.canvas_center();
        (center.y - at.y).atan2(center.x - at.x)
    }
}
