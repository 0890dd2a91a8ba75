//! Shape selection: turns a cell's decoded features into a draw instruction.

use crate::color::Color;
use crate::decode::{COLOR_WIDTH, Palette, bit, color_at};
use crate::error::IdenticonResult;
use crate::grid::{Cell, CellRole};
use crate::hash::Digest;
use crate::surface::Point;

// =============================================================================
// Shape kinds
// =============================================================================

/// Shapes the center cell can take.
///
/// The binary feature extractor only reaches `Square` and `Circle`; the
/// other two are selected by keys 2 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CenterShape {
    /// Key 0
    Square,
    /// Key 1
    Circle,
    /// Key 2
    Diamond,
    /// Key 3
    Octagon,
}

impl CenterShape {
    /// Map a selector key to a shape. Keys above 3 select nothing.
    pub const fn from_key(key: u8) -> Option<Self> {
        match key {
            0 => Some(Self::Square),
            1 => Some(Self::Circle),
            2 => Some(Self::Diamond),
            3 => Some(Self::Octagon),
            _ => None,
        }
    }
}

/// Every shape the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Center cell shape
    Center(CenterShape),
    /// Triangle on a boundary cell
    BoundaryTriangle,
    /// Effect triangle on an interior cell
    InteriorTriangle,
}

impl ShapeKind {
    /// Stable lowercase name, used in log fields.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Center(CenterShape::Square) => "square",
            Self::Center(CenterShape::Circle) => "circle",
            Self::Center(CenterShape::Diamond) => "diamond",
            Self::Center(CenterShape::Octagon) => "octagon",
            Self::BoundaryTriangle => "boundary_triangle",
            Self::InteriorTriangle => "interior_triangle",
        }
    }
}

// =============================================================================
// Features and instructions
// =============================================================================

/// Values decoded for one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFeatures {
    /// Shape presence (non-center) or shape selector (center)
    pub object_key: u8,
    /// Chooses between the colors at hex offsets 0 and 6
    pub color_key: u8,
    /// Color picked by `color_key`.
    ///
    /// Decoded for every cell but never drawn: all shapes use palette colors.
    pub cell_color: Color,
    /// Angle from the cell to the canvas center, radians
    pub rotation: f64,
}

impl CellFeatures {
    /// Decode the features at `offset` (the cell's `(row * N + col) * 2`).
    pub fn decode(digest: &Digest, offset: usize, rotation: f64) -> IdenticonResult<Self> {
        let hex = digest.as_hex();
        let object_key = bit(hex, offset)?;
        let color_key = bit(hex, offset + 2)?;
        let cell_color = color_at(hex, usize::from(color_key) * COLOR_WIDTH)?;
        Ok(Self {
            object_key,
            color_key,
            cell_color,
            rotation,
        })
    }
}

/// One shape to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawInstruction {
    /// Source cell
    pub cell: Cell,
    /// What to draw
    pub kind: ShapeKind,
    /// Pixel center
    pub center: Point,
    /// Cell size in pixels
    pub size: f64,
    /// Fill color
    pub color: Color,
    /// Rotation in radians (ignored by center shapes)
    pub rotation: f64,
}

/// Choose what to draw for a cell, if anything.
pub fn select(
    cell: Cell,
    role: CellRole,
    features: &CellFeatures,
    palette: &Palette,
    center: Point,
    size: f64,
) -> Option<DrawInstruction> {
    let (kind, color) = match role {
        CellRole::Center => (
            ShapeKind::Center(CenterShape::from_key(features.object_key)?),
            palette.center,
        ),
        _ if features.object_key == 0 => return None,
        CellRole::Boundary => (ShapeKind::BoundaryTriangle, palette.boundary),
        CellRole::Interior => (ShapeKind::InteriorTriangle, palette.interior),
    };

    Some(DrawInstruction {
        cell,
        kind,
        center,
        size,
        color,
        rotation: features.rotation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette {
            center: Color::rgb(1, 1, 1),
            boundary: Color::rgb(2, 2, 2),
            interior: Color::rgb(3, 3, 3),
        }
    }

    fn features(object_key: u8) -> CellFeatures {
        CellFeatures {
            object_key,
            color_key: 1,
            cell_color: Color::rgb(9, 9, 9),
            rotation: 0.5,
        }
    }

    fn pick(role: CellRole, object_key: u8) -> Option<DrawInstruction> {
        select(Cell::new(0, 0), role, &features(object_key), &palette(), Point::new(5.0, 5.0), 10.0)
    }

    #[test]
    fn test_center_dispatch() {
        let square = pick(CellRole::Center, 0).unwrap();
        assert_eq!(square.kind, ShapeKind::Center(CenterShape::Square));
        assert_eq!(square.color, palette().center);

        let circle = pick(CellRole::Center, 1).unwrap();
        assert_eq!(circle.kind, ShapeKind::Center(CenterShape::Circle));
        assert_eq!(circle.color, palette().center);

        let center_kind = |key| pick(CellRole::Center, key).unwrap().kind;
        assert_eq!(center_kind(2), ShapeKind::Center(CenterShape::Diamond));
        assert_eq!(center_kind(3), ShapeKind::Center(CenterShape::Octagon));
        assert!(pick(CellRole::Center, 4).is_none());
    }

    #[test]
    fn test_empty_cells() {
        assert!(pick(CellRole::Boundary, 0).is_none());
        assert!(pick(CellRole::Interior, 0).is_none());
    }

    #[test]
    fn test_triangles_use_palette_not_cell_color() {
        let boundary = pick(CellRole::Boundary, 1).unwrap();
        assert_eq!(boundary.kind, ShapeKind::BoundaryTriangle);
        assert_eq!(boundary.color, palette().boundary);
        assert_eq!(boundary.rotation, 0.5);
        assert_eq!(boundary.size, 10.0);

        let interior = pick(CellRole::Interior, 1).unwrap();
        assert_eq!(interior.kind, ShapeKind::InteriorTriangle);
        assert_eq!(interior.color, palette().interior);
    }

    #[test]
    fn test_decode_features() {
        // offset 0: 0x10 -> 1, offset 2: 0xff -> 0 -> color at 0
        let hex = format!("10ff00aabbcc{}", "0".repeat(52));
        let digest = Digest::from_hex(&hex).unwrap();
        let features = CellFeatures::decode(&digest, 0, 1.0).unwrap();
        assert_eq!(features.object_key, 1);
        assert_eq!(features.color_key, 0);
        assert_eq!(features.cell_color.to_string(), "#10ff00");

        // offset 2: 0xff -> 0, offset 4: 0x00 -> 1 -> color at 6
        let features = CellFeatures::decode(&digest, 2, 1.0).unwrap();
        assert_eq!(features.object_key, 0);
        assert_eq!(features.color_key, 1);
        assert_eq!(features.cell_color.to_string(), "#aabbcc");
    }
}
