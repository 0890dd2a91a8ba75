//! Identicon generation: hash, decode, select, draw.
//!
//! Everything that can fail (surface checks, digest reads) runs while
//! building the [`Plan`]. The surface is only cleared once the plan is
//! complete, so an error never leaves a half-drawn frame.

use tracing::{Level, debug, span, trace};

#[cfg(feature = "parallel")]
use crate::canvas::Canvas;
use crate::config::IdenticonConfig;
use crate::decode::Palette;
use crate::error::IdenticonResult;
use crate::grid::{Cell, CellRole, Grid};
use crate::hash::{Digest, hash_with};
use crate::layout::Layout;
use crate::render;
use crate::shape::{CellFeatures, DrawInstruction, select};
use crate::surface::Surface;

// =============================================================================
// Plan
// =============================================================================

/// Everything decided for one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedCell {
    /// Grid position
    pub cell: Cell,
    /// Center, boundary or interior
    pub role: CellRole,
    /// Decoded features
    pub features: CellFeatures,
    /// What to draw, if anything
    pub instruction: Option<DrawInstruction>,
}

/// The full set of decisions for one input, in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Digest the plan was derived from
    pub digest: Digest,
    /// Palette sliced from the digest
    pub palette: Palette,
    /// One entry per grid cell
    pub cells: Vec<PlannedCell>,
}

impl Plan {
    /// Draw instructions in row-major order, skipping empty cells.
    pub fn instructions(&self) -> impl Iterator<Item = &DrawInstruction> {
        self.cells.iter().filter_map(|c| c.instruction.as_ref())
    }

    /// Planned cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&PlannedCell> {
        self.cells.iter().find(|c| c.cell == Cell::new(row, col))
    }

    /// Clear the surface and draw every instruction.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for instruction in self.instructions() {
            trace!(
                row = instruction.cell.row,
                col = instruction.cell.col,
                shape = instruction.kind.name(),
                color = instruction.color.to_hex().as_str(),
                "draw"
            );
            render::draw(surface, instruction);
        }
    }
}

// =============================================================================
// Identicon
// =============================================================================

/// A validated, reusable identicon generator.
///
/// Holds no per-input state; one instance can serve any number of inputs
/// and surfaces.
#[derive(Debug, Clone)]
pub struct Identicon {
    config: IdenticonConfig,
    grid: Grid,
}

impl Identicon {
    /// Validate `config` and build a generator.
    pub fn new(config: IdenticonConfig) -> IdenticonResult<Self> {
        let grid = config.validate()?;
        Ok(Self { config, grid })
    }

    /// Configuration in use.
    pub fn config(&self) -> &IdenticonConfig {
        &self.config
    }

    /// Resolved grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Hash `input` with the configured algorithm.
    pub fn digest(&self, input: &str) -> Digest {
        hash_with(self.config.algorithm, input)
    }

    /// Plan the identicon for `input` on a `width`×`height` surface.
    pub fn plan(&self, input: &str, width: u32, height: u32) -> IdenticonResult<Plan> {
        self.plan_digest(&self.digest(input), width, height)
    }

    /// Plan the identicon for an existing digest.
    pub fn plan_digest(&self, digest: &Digest, width: u32, height: u32) -> IdenticonResult<Plan> {
        let layout = Layout::new(self.grid.size(), width, height)?;
        let palette = Palette::from_digest(digest)?;
        let size = layout.cell_size();

        let cells = self
            .grid
            .cells()
            .map(|cell| -> IdenticonResult<PlannedCell> {
                let role = self.grid.role(cell);
                let offset = self.grid.feature_offset(cell);
                let features = CellFeatures::decode(digest, offset, layout.rotation(cell))?;
                let center = layout.cell_center(cell);
                let instruction = select(cell, role, &features, &palette, center, size);
                Ok(PlannedCell {
                    cell,
                    role,
                    features,
                    instruction,
                })
            })
            .collect::<IdenticonResult<Vec<_>>>()?;

        Ok(Plan {
            digest: digest.clone(),
            palette,
            cells,
        })
    }

    /// Draw the identicon for `digest` onto `surface`.
    pub fn render_digest<S>(&self, digest: &Digest, surface: &mut S) -> IdenticonResult<Plan>
    where
        S: Surface + ?Sized,
    {
        let plan = self.plan_digest(digest, surface.width(), surface.height())?;
        plan.draw(surface);
        debug!(
            shapes = plan.instructions().count(),
            center_color = plan.palette.center.to_hex().as_str(),
            "Identicon drawn"
        );
        Ok(plan)
    }

    /// Hash `input` and draw its identicon onto `surface`.
    ///
    /// Returns the digest that was drawn.
    pub fn generate<S>(&self, input: &str, surface: &mut S) -> IdenticonResult<Digest>
    where
        S: Surface + ?Sized,
    {
        let span = span!(
            Level::DEBUG,
            "identicon_generate",
            algorithm = self.config.algorithm.name(),
            grid_size = self.grid.size(),
            width = surface.width(),
            height = surface.height()
        );
        let _enter = span.enter();

        let digest = self.digest(input);
        self.render_digest(&digest, surface)?;
        Ok(digest)
    }

    /// Render each input onto its own `side`×`side` canvas, in parallel.
    ///
    /// Results keep the order of `inputs`.
    #[cfg(feature = "parallel")]
    pub fn render_batch<T>(&self, inputs: &[T], side: u32) -> Vec<IdenticonResult<Canvas>>
    where
        T: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        debug!(count = inputs.len(), side, "Rendering identicon batch");
        inputs
            .par_iter()
            .map(|input| -> IdenticonResult<Canvas> {
                let mut canvas = Canvas::square(side);
                self.generate(input.as_ref(), &mut canvas)?;
                Ok(canvas)
            })
            .collect()
    }
}

impl Default for Identicon {
    fn default() -> Self {
        Self {
            config: IdenticonConfig::default(),
            grid: Grid::default(),
        }
    }
}

/// Draw the identicon for `input` with the default configuration.
pub fn generate<S: Surface + ?Sized>(input: &str, surface: &mut S) -> IdenticonResult<Digest> {
    Identicon::default().generate(input, surface)
}
