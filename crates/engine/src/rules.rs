//! The per-step transition rule
//!
//! Standard Game-of-Life survive/birth rule (survive on 2-3 live neighbors,
//! birth on exactly 3) over a toroidal Moore neighborhood, with the outcome
//! folded into the four-state encoding: a cell that dies this step is marked
//! `Dying`, a cell born this step is marked `Born`. The markers exist for
//! caller-side animation only; they never feed back into the rule, because
//! [`CellState::is_live`] treats `Born` as alive and `Dying` as dead.
//!
//! Every function allocates its result. Neighbor counts always read the
//! input grid, so no cell ever observes a partially updated generation.

use lifesynth_core::{CellState, Grid};

/// Moore neighborhood: the 8 cells adjacent horizontally, vertically,
/// and diagonally.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Create an all-`Dead` grid of the given dimension.
pub fn empty(size: usize) -> Grid {
    Grid::new(size)
}

/// Compute the next generation of `grid`.
///
/// Pure and deterministic; the input grid is never mutated. For each cell
/// the live-neighbor count is taken from the *current* generation, then the
/// transition table applies:
///
/// | current | live neighbors | next |
/// |---|---|---|
/// | `Alive`/`Born` | < 2 or > 3 | `Dying` |
/// | `Alive`/`Born` | 2 or 3 | `Alive` |
/// | `Dead`/`Dying` | exactly 3 | `Born` |
/// | `Dead`/`Dying` | otherwise | `Dead` |
pub fn step(grid: &Grid) -> Grid {
    let size = grid.size();
    let mut next = Grid::new(size);
    for row in 0..size {
        for col in 0..size {
            let live = live_neighbors(grid, row, col);
            let state = if grid.get(row, col).is_live() {
                if (2..=3).contains(&live) {
                    CellState::Alive
                } else {
                    CellState::Dying
                }
            } else if live == 3 {
                CellState::Born
            } else {
                CellState::Dead
            };
            next.set(row, col, state);
        }
    }
    next
}

/// Flip the cell at `(row, col)` between dead and alive.
///
/// Returns a new grid with only that cell changed. Out-of-bounds
/// coordinates are absorbed as a no-op: the returned grid equals the input.
pub fn toggle(grid: &Grid, row: usize, col: usize) -> Grid {
    let mut next = grid.clone();
    if next.contains(row, col) {
        next.set(row, col, grid.get(row, col).toggled());
    }
    next
}

/// Count live cells among the 8 toroidal Moore neighbors of `(row, col)`.
fn live_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    NEIGHBOR_OFFSETS
        .into_iter()
        .filter(|&(dr, dc)| {
            let r = grid.wrap(row as isize + dr);
            let c = grid.wrap(col as isize + dc);
            grid.get(r, c).is_live()
        })
        .count()
}
