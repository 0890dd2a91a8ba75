//! Shape geometry and dispatch onto a [`Surface`].
//!
//! All shapes are filled, centered on the instruction's point, and sized
//! by the cell size.

use std::f64::consts::{FRAC_PI_4, PI, SQRT_2, TAU};

use smallvec::SmallVec;

use crate::shape::{CenterShape, DrawInstruction, ShapeKind};
use crate::surface::{Point, Rect, Surface};

/// Vertex list for the polygons drawn here (at most eight corners).
pub type Vertices = SmallVec<[Point; 8]>;

/// Vertex angle offsets of the boundary triangle.
pub const BOUNDARY_TRIANGLE_ANGLES: [f64; 3] = [PI, PI * 5.0 / 3.0, -PI * 5.0 / 3.0];

/// Vertex angle offsets of the interior effect-triangle.
///
/// The first vertex sits opposite the rotation, so the two remaining
/// vertices straddle it: a narrow isosceles sliver rather than a turned
/// copy of the boundary triangle.
pub const INTERIOR_TRIANGLE_ANGLES: [f64; 3] = [PI, PI * 2.0 / 3.0, -PI * 2.0 / 3.0];

/// Rhombus with corners `size / 2` above, right of, below and left of `center`.
pub fn diamond_vertices(center: Point, size: f64) -> Vertices {
    let h = size / 2.0;
    [
        Point::new(center.x, center.y - h),
        Point::new(center.x + h, center.y),
        Point::new(center.x, center.y + h),
        Point::new(center.x - h, center.y),
    ]
    .into_iter()
    .collect()
}

/// Radius used for the octagon's vertices.
#[inline]
pub fn octagon_radius(size: f64) -> f64 {
    size / 2.0 * SQRT_2 / (1.0 + SQRT_2)
}

/// Regular octagon with a vertex every 45°, starting at angle 0.
pub fn octagon_vertices(center: Point, size: f64) -> Vertices {
    let r = octagon_radius(size);
    (0..8).map(|k| center.polar_offset(r, FRAC_PI_4 * k as f64)).collect()
}

/// Triangle with vertices at `rotation + offset` for each angle offset,
/// each at distance `size / 2` from `center`.
pub fn triangle_vertices(center: Point, size: f64, rotation: f64, offsets: &[f64; 3]) -> Vertices {
    offsets
        .iter()
        .map(|offset| center.polar_offset(size / 2.0, rotation + offset))
        .collect()
}

/// Draw one instruction.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, instruction: &DrawInstruction) {
    let DrawInstruction {
        kind,
        center,
        size,
        color,
        rotation,
        ..
    } = *instruction;

    match kind {
        ShapeKind::Center(CenterShape::Square) => {
            surface.fill_rect(Rect::centered(center, size), color);
        }
        ShapeKind::Center(CenterShape::Circle) => {
            surface.fill_arc(center, size / 2.0, 0.0, TAU, color);
        }
        ShapeKind::Center(CenterShape::Diamond) => {
            surface.fill_polygon(&diamond_vertices(center, size), color);
        }
        ShapeKind::Center(CenterShape::Octagon) => {
            surface.fill_polygon(&octagon_vertices(center, size), color);
        }
        ShapeKind::BoundaryTriangle => {
            let points = triangle_vertices(center, size, rotation, &BOUNDARY_TRIANGLE_ANGLES);
            surface.fill_polygon(&points, color);
        }
        ShapeKind::InteriorTriangle => {
            let points = triangle_vertices(center, size, rotation, &INTERIOR_TRIANGLE_ANGLES);
            surface.fill_polygon(&points, color);
        }
    }
}
