//! Logical grid: cell coordinates, the center cell and the boundary set.

use rustc_hash::FxHashSet;

use crate::error::{IdenticonError, IdenticonResult};
use crate::hash::DIGEST_HEX_LEN;

/// Default grid side length.
pub const DEFAULT_GRID_SIZE: usize = 5;

/// Largest grid side length whose per-cell reads fit in a 64-char digest.
pub const MAX_GRID_SIZE: usize = max_grid_size();

const fn max_grid_size() -> usize {
    let mut n = 1;
    while required_hex_len(n + 1) <= DIGEST_HEX_LEN {
        n += 1;
    }
    n
}

/// Hex characters a grid of side `size` reads: the last cell's color key
/// pair starts at `(size² - 1) * 2 + 2` and is two characters wide.
pub const fn required_hex_len(size: usize) -> usize {
    size * size * 2 + 2
}

// =============================================================================
// Cell
// =============================================================================

/// Grid coordinates, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Cell {
    /// Create a cell
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// How a cell is treated by the shape selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRole {
    /// The single center cell
    Center,
    /// A member of the boundary set
    Boundary,
    /// Any other cell
    Interior,
}

// =============================================================================
// Boundary policy
// =============================================================================

/// The hard-coded boundary set of a 5x5 grid.
pub const FIXED_BOUNDARY: [Cell; 8] = [
    Cell::new(0, 2),
    Cell::new(1, 2),
    Cell::new(2, 0),
    Cell::new(2, 1),
    Cell::new(2, 3),
    Cell::new(2, 4),
    Cell::new(3, 2),
    Cell::new(4, 2),
];

/// Which non-center cells get boundary triangles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Every non-center cell in the center's row or column.
    ///
    /// Identical to [`FIXED_BOUNDARY`] on a 5x5 grid.
    #[default]
    Cross,
    /// Exactly [`FIXED_BOUNDARY`]; only valid on a 5x5 grid
    Fixed,
    /// Caller-supplied cells; a center cell in the set is ignored
    Explicit(FxHashSet<Cell>),
}

impl BoundaryPolicy {
    /// Build an explicit policy from any cell collection.
    pub fn explicit<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Self::Explicit(cells.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Grid
// =============================================================================

fn cross(size: usize, center: Cell) -> FxHashSet<Cell> {
    (0..size)
        .flat_map(|i| [Cell::new(center.row, i), Cell::new(i, center.col)])
        .filter(|cell| *cell != center)
        .collect()
}

/// A validated N×N grid with its center and boundary set resolved.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    center: Cell,
    boundary: FxHashSet<Cell>,
}

impl Grid {
    /// Validate `size` against the digest length and resolve `policy`.
    pub fn new(size: usize, policy: &BoundaryPolicy) -> IdenticonResult<Self> {
        if size == 0 {
            return Err(IdenticonError::InvalidGridSize {
                size,
                reason: "grid must have at least one cell",
            });
        }
        if size > MAX_GRID_SIZE {
            return Err(IdenticonError::InvalidGridSize {
                size,
                reason: "per-cell feature reads would overrun the digest",
            });
        }

        let center = Cell::new(size / 2, size / 2);
        let boundary = match policy {
            BoundaryPolicy::Cross => cross(size, center),
            BoundaryPolicy::Fixed => {
                if size != DEFAULT_GRID_SIZE {
                    return Err(IdenticonError::FixedBoundaryGridSize { size });
                }
                FIXED_BOUNDARY.iter().copied().collect()
            }
            BoundaryPolicy::Explicit(cells) => {
                if let Some(bad) = cells.iter().find(|c| c.row >= size || c.col >= size) {
                    return Err(IdenticonError::BoundaryOutsideGrid {
                        row: bad.row,
                        col: bad.col,
                        size,
                    });
                }
                cells.iter().copied().filter(|cell| *cell != center).collect()
            }
        };

        Ok(Self { size, center, boundary })
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The center cell, `(⌊N/2⌋, ⌊N/2⌋)`.
    #[inline]
    pub fn center(&self) -> Cell {
        self.center
    }

    /// Whether `cell` is in the boundary set.
    #[inline]
    pub fn is_boundary(&self, cell: Cell) -> bool {
        self.boundary.contains(&cell)
    }

    /// Number of boundary cells.
    pub fn boundary_len(&self) -> usize {
        self.boundary.len()
    }

    /// Classify a cell.
    pub fn role(&self, cell: Cell) -> CellRole {
        if cell == self.center {
            CellRole::Center
        } else if self.is_boundary(cell) {
            CellRole::Boundary
        } else {
            CellRole::Interior
        }
    }

    /// Hex offset of the cell's object key: `(row * N + col) * 2`.
    #[inline]
    pub fn feature_offset(&self, cell: Cell) -> usize {
        (cell.row * self.size + cell.col) * 2
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Cell::new(row, col)))
    }
}

impl Default for Grid {
    /// The 5x5 grid with the cross boundary.
    fn default() -> Self {
        let center = Cell::new(DEFAULT_GRID_SIZE / 2, DEFAULT_GRID_SIZE / 2);
        Self {
            size: DEFAULT_GRID_SIZE,
            center,
            boundary: cross(DEFAULT_GRID_SIZE, center),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid5() -> Grid {
        Grid::new(5, &BoundaryPolicy::default()).unwrap()
    }

    #[test]
    fn test_max_grid_size() {
        assert_eq!(MAX_GRID_SIZE, 5);
        assert_eq!(required_hex_len(5), 52);
        assert!(required_hex_len(6) > DIGEST_HEX_LEN);
    }

    #[test]
    fn test_center_uniqueness() {
        let grid = grid5();
        let centers: Vec<_> = grid.cells().filter(|c| grid.role(*c) == CellRole::Center).collect();
        assert_eq!(centers, vec![Cell::new(2, 2)]);
        assert_eq!(grid.cells().count(), 25);
    }

    #[test]
    fn test_boundary_classification() {
        let grid = grid5();
        assert_eq!(grid.role(Cell::new(0, 2)), CellRole::Boundary);
        assert_eq!(grid.role(Cell::new(0, 0)), CellRole::Interior);
        assert_eq!(grid.role(Cell::new(2, 2)), CellRole::Center);
        assert!(!grid.is_boundary(Cell::new(2, 2)));
    }

    #[test]
    fn test_cross_matches_fixed_on_five() {
        let cross = grid5();
        assert_eq!(cross.boundary, Grid::default().boundary);
        let fixed = Grid::new(5, &BoundaryPolicy::Fixed).unwrap();
        assert_eq!(cross.boundary, fixed.boundary);
        assert_eq!(cross.boundary_len(), 8);
    }

    #[test]
    fn test_fixed_rejects_other_sizes() {
        assert!(matches!(
            Grid::new(3, &BoundaryPolicy::Fixed),
            Err(IdenticonError::FixedBoundaryGridSize { size: 3 })
        ));
    }

    #[test]
    fn test_even_and_tiny_grids() {
        let grid = Grid::new(4, &BoundaryPolicy::Cross).unwrap();
        assert_eq!(grid.center(), Cell::new(2, 2));
        assert_eq!(grid.boundary_len(), 6);

        let grid = Grid::new(1, &BoundaryPolicy::Cross).unwrap();
        assert_eq!(grid.center(), Cell::new(0, 0));
        assert_eq!(grid.boundary_len(), 0);
        assert_eq!(grid.cells().count(), 1);
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert!(matches!(
            Grid::new(0, &BoundaryPolicy::Cross),
            Err(IdenticonError::InvalidGridSize { size: 0, .. })
        ));
        assert!(matches!(
            Grid::new(6, &BoundaryPolicy::Cross),
            Err(IdenticonError::InvalidGridSize { size: 6, .. })
        ));
    }

    #[test]
    fn test_explicit_policy() {
        let policy = BoundaryPolicy::explicit([Cell::new(0, 0), Cell::new(1, 1), Cell::new(1, 1)]);
        let grid = Grid::new(3, &policy).unwrap();
        assert_eq!(grid.role(Cell::new(0, 0)), CellRole::Boundary);
        // Center is never boundary even when listed
        assert_eq!(grid.role(Cell::new(1, 1)), CellRole::Center);
        assert_eq!(grid.boundary_len(), 1);

        let policy = BoundaryPolicy::explicit([(3_usize, 0_usize)]);
        assert!(matches!(
            Grid::new(3, &policy),
            Err(IdenticonError::BoundaryOutsideGrid { row: 3, col: 0, size: 3 })
        ));
    }

    #[test]
    fn test_feature_offsets_row_major() {
        let grid = grid5();
        let offsets: Vec<_> = grid.cells().map(|c| grid.feature_offset(c)).collect();
        assert_eq!(offsets.first(), Some(&0));
        assert_eq!(offsets.last(), Some(&48));
        assert!(offsets.windows(2).all(|w| w[1] == w[0] + 2));
    }
}
