//! glyphid - Deterministic identicons
//!
//! ## Core Concepts
//!
//! An input string is hashed into a 256-bit digest. Fixed offsets of the
//! digest's hex encoding decide, for every cell of a small square grid,
//! whether a shape is drawn there and which one. The same input always
//! yields the same picture.
//!
//! ## Pipeline
//! - `hash`: input string → [`Digest`] (SHA-256 by default, BLAKE3 optional)
//! - `decode`: digest → bits, colors and the three-color [`Palette`]
//! - `grid` / `layout`: cell roles (center, boundary, interior) and pixel geometry
//! - `shape`: per-cell features → [`DrawInstruction`]
//! - `render`: instruction → [`Surface`] primitives
//! - `generate`: the whole pipeline behind [`Identicon`]
//!
//! ## Usage
//!
//! ```
//! use glyphid::{Canvas, Identicon, IdenticonConfig};
//!
//! let identicon = Identicon::new(IdenticonConfig::default()).unwrap();
//! let mut canvas = Canvas::square(100);
//! let digest = identicon.generate("alice", &mut canvas).unwrap();
//!
//! assert_eq!(&digest.as_hex()[..6], "2bd806");
//! assert!(canvas.painted_pixels() > 0);
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Digest algorithms and the `Digest` type
pub mod hash;

/// Bit and color extraction from a hex digest
pub mod decode;

/// RGB colors
pub mod color;

/// Grid cells, center and boundary set
pub mod grid;

/// Cell-to-pixel mapping
pub mod layout;

/// Shape selection
pub mod shape;

/// Shape geometry and drawing
pub mod render;

/// Drawing surface trait
pub mod surface;

/// In-memory RGBA surface
pub mod canvas;

/// Call-recording surface
pub mod recording;

/// Generator configuration
pub mod config;

/// The generation pipeline
pub mod generate;

/// Single-flight generation (requires `async` feature)
#[cfg(feature = "async")]
pub mod live;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Pipeline
pub use generate::{Identicon, Plan, PlannedCell, generate};

#[cfg(feature = "async")]
pub use live::{LiveIdenticon, Outcome, PendingRender};

// Configuration
pub use config::IdenticonConfig;
pub use grid::{BoundaryPolicy, Cell, CellRole, Grid};

// Digest and features
pub use hash::{Digest, DigestAlgorithm};
pub use decode::Palette;
pub use color::Color;
pub use shape::{CellFeatures, CenterShape, DrawInstruction, ShapeKind};

// Surfaces
pub use surface::{Point, Rect, Surface};
pub use canvas::Canvas;
pub use recording::{DrawCall, RecordingSurface};

// Error types
pub use error::{IdenticonError, IdenticonResult};
