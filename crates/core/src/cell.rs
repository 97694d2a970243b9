//! Cell state encoding
//!
//! A cell carries both its life state and a one-step animation marker:
//! `Born` is a cell that became alive this step, `Dying` one that was alive
//! and died this step. Renderers draw the markers differently; the survival
//! rule only ever asks [`CellState::is_live`].

use serde::{Deserialize, Serialize};

/// State of a single grid cell.
///
/// Wire encoding is `Dead=0, Alive=1, Born=2, Dying=3`. `Dead` and `Dying`
/// are both "currently not alive"; `Alive` and `Born` are both "currently
/// alive". The markers are assigned from the previous generation's state
/// after neighbor counts are computed, so a `Dying` cell never counts as a
/// live neighbor within the step that marks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Not alive, unchanged this step.
    Dead,
    /// Was alive last step and remains alive.
    Alive,
    /// Became alive this step.
    Born,
    /// Was alive and died this step.
    Dying,
}

impl CellState {
    /// Whether this cell counts as alive for neighbor counting.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifesynth_core::CellState;
    ///
    /// assert!(CellState::Alive.is_live());
    /// assert!(CellState::Born.is_live());
    /// assert!(!CellState::Dying.is_live());
    /// assert!(!CellState::Dead.is_live());
    /// ```
    pub fn is_live(&self) -> bool {
        matches!(self, CellState::Alive | CellState::Born)
    }

    /// The state after a caller toggles this cell.
    ///
    /// Toggling flips live-ness and collapses the transient markers:
    /// a live cell (`Alive` or `Born`) becomes `Dead`, a non-live cell
    /// (`Dead` or `Dying`) becomes `Alive`.
    pub fn toggled(&self) -> CellState {
        if self.is_live() {
            CellState::Dead
        } else {
            CellState::Alive
        }
    }

    /// Numeric wire code (`Dead=0, Alive=1, Born=2, Dying=3`).
    pub fn code(&self) -> u8 {
        match self {
            CellState::Dead => 0,
            CellState::Alive => 1,
            CellState::Born => 2,
            CellState::Dying => 3,
        }
    }

    /// Decode a numeric wire code.
    ///
    /// Returns `None` for codes outside `0..=3`.
    pub fn from_code(code: u8) -> Option<CellState> {
        match code {
            0 => Some(CellState::Dead),
            1 => Some(CellState::Alive),
            2 => Some(CellState::Born),
            3 => Some(CellState::Dying),
            _ => None,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CellState::Dead => "Dead",
            CellState::Alive => "Alive",
            CellState::Born => "Born",
            CellState::Dying => "Dying",
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Dead
    }
}

impl std::fmt::Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
