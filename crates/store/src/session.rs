//! Owned session state
//!
//! `Session` is the mutable (grid, step counter) pair a store entry
//! protects. All mutation goes through [`Session::apply`] while the
//! caller holds the entry's lock; the engine itself is pure, so applying
//! an action is allocate-new-grid then swap.

use lifesynth_core::{Grid, SessionAction, SessionSnapshot};
use lifesynth_engine as engine;

/// One session's owned state: its grid and step counter.
#[derive(Debug)]
pub(crate) struct Session {
    grid: Grid,
    step_counter: u64,
}

impl Session {
    /// Create a fresh session: all-dead grid, counter 0.
    pub(crate) fn new(grid_size: usize) -> Self {
        Self {
            grid: engine::empty(grid_size),
            step_counter: 0,
        }
    }

    /// Apply one action in place.
    ///
    /// The caller holds this session's lock, so the grid swap and counter
    /// update are observed atomically.
    pub(crate) fn apply(&mut self, action: &SessionAction) {
        match action {
            SessionAction::Toggle { row, col } => {
                self.grid = engine::toggle(&self.grid, *row, *col);
            }
            SessionAction::Step => {
                self.grid = engine::step(&self.grid);
                self.step_counter += 1;
            }
            SessionAction::Reset => {
                self.grid = engine::empty(self.grid.size());
                self.step_counter = 0;
            }
        }
    }

    /// Owned copy of the current state.
    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.grid.clone(),
            step_counter: self.step_counter,
        }
    }
}
