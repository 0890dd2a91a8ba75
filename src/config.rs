//! Generator configuration.

use crate::error::IdenticonResult;
use crate::grid::{BoundaryPolicy, DEFAULT_GRID_SIZE, Grid};
use crate::hash::DigestAlgorithm;

/// Configuration for identicon generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticonConfig {
    /// Grid side length (1..=5).
    pub grid_size: usize,
    /// Digest algorithm feeding feature extraction.
    pub algorithm: DigestAlgorithm,
    /// Which cells get boundary triangles.
    pub boundary: BoundaryPolicy,
}

impl IdenticonConfig {
    /// Create a config with the given grid size and defaults elsewhere.
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            algorithm: DigestAlgorithm::default(),
            boundary: BoundaryPolicy::default(),
        }
    }

    /// Set the grid size.
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the digest algorithm.
    pub fn with_algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the boundary policy.
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Check the grid size and boundary policy together.
    pub fn validate(&self) -> IdenticonResult<Grid> {
        Grid::new(self.grid_size, &self.boundary)
    }
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}
