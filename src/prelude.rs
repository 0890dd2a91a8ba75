//! Prelude module for common imports.
//!
//! ```
//! use glyphid::prelude::*;
//!
//! let mut canvas = Canvas::square(50);
//! generate("alice", &mut canvas).unwrap();
//! ```

// Pipeline
pub use crate::generate::{Identicon, Plan, PlannedCell, generate};

#[cfg(feature = "async")]
pub use crate::live::{LiveIdenticon, Outcome, PendingRender};

// Configuration
pub use crate::config::IdenticonConfig;
pub use crate::grid::{BoundaryPolicy, Cell, CellRole, DEFAULT_GRID_SIZE, Grid, MAX_GRID_SIZE};

// Digest and decoding
pub use crate::hash::{Digest, DigestAlgorithm, DigestHasher, hash, hash_with};
pub use crate::decode::{Palette, bit, color_at};
pub use crate::color::Color;

// Shapes
pub use crate::shape::{CellFeatures, CenterShape, DrawInstruction, ShapeKind, select};
pub use crate::render::draw;

// Surfaces
pub use crate::surface::{Point, Rect, Surface};
pub use crate::canvas::Canvas;
pub use crate::recording::{DrawCall, RecordingSurface};

// Error
pub use crate::error::{IdenticonError, IdenticonResult};
