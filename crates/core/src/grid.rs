//! Toroidal cell grid
//!
//! [`Grid`] is pure data: a square matrix of [`CellState`] with wraparound
//! adjacency. The transition rule that reads and produces grids lives in
//! `lifesynth-engine`; nothing here mutates cells except the plain setter.

use crate::cell::CellState;
use serde::{Deserialize, Serialize};

/// Default grid dimension, matching the observed deployment.
pub const DEFAULT_GRID_SIZE: usize = 16;

/// A square toroidal matrix of cell states.
///
/// Cells are addressed by `(row, col)` in `[0, size) x [0, size)` and stored
/// row-major. The dimension is fixed at creation and never changes.
///
/// # Examples
///
/// ```
/// use lifesynth_core::{CellState, Grid};
///
/// let mut grid = Grid::new(16);
/// assert_eq!(grid.get(3, 7), CellState::Dead);
///
/// grid.set(3, 7, CellState::Alive);
/// assert_eq!(grid.get(3, 7), CellState::Alive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-`Dead` grid of the given dimension.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Dead; size * size],
        }
    }

    /// Grid dimension (the grid is `size x size`).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(row, col)` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Read the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds; callers gate on
    /// [`Grid::contains`] or iterate within `0..size`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[self.index(row, col)]
    }

    /// Write the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        let idx = self.index(row, col);
        self.cells[idx] = state;
    }

    /// Wrap a signed coordinate onto the torus.
    ///
    /// `-1` maps to `size - 1`, `size` maps to `0`.
    #[inline]
    pub fn wrap(&self, coord: isize) -> usize {
        coord.rem_euclid(self.size as isize) as usize
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size)
    }

    /// Number of live cells (`Alive` or `Born`).
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_live()).count()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.size,
            self.size
        );
        row * self.size + col
    }
}
