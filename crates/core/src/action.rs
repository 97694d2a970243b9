//! Session mutations
//!
//! [`SessionAction`] is the typed form of the wire-level `(action, cell)`
//! pair. Parsing happens before any session state is touched, so a request
//! that fails to parse can never leave a session half-mutated.

use crate::error::{Error, Result};

/// A mutation a caller can apply to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Flip one cell between dead and alive.
    Toggle {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// Advance the simulation by one generation.
    Step,
    /// Replace the grid with an all-dead grid and zero the step counter.
    Reset,
}

impl SessionAction {
    /// Parse the wire-level action keyword and optional cell payload.
    ///
    /// - `"toggle"` requires a `[row, col]` cell payload
    /// - `"step"` and `"reset"` take no payload (a supplied cell is ignored)
    /// - anything else is [`Error::InvalidAction`]
    ///
    /// # Examples
    ///
    /// ```
    /// use lifesynth_core::SessionAction;
    ///
    /// let action = SessionAction::parse("toggle", Some([2, 5])).unwrap();
    /// assert_eq!(action, SessionAction::Toggle { row: 2, col: 5 });
    ///
    /// assert!(SessionAction::parse("fly", None).is_err());
    /// ```
    pub fn parse(action: &str, cell: Option<[usize; 2]>) -> Result<Self> {
        match action {
            "toggle" => match cell {
                Some([row, col]) => Ok(SessionAction::Toggle { row, col }),
                None => Err(Error::InvalidPayload(
                    "toggle requires a cell payload".to_string(),
                )),
            },
            "step" => Ok(SessionAction::Step),
            "reset" => Ok(SessionAction::Reset),
            other => Err(Error::InvalidAction(other.to_string())),
        }
    }

    /// The wire-level action keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::Toggle { .. } => "toggle",
            SessionAction::Step => "step",
            SessionAction::Reset => "reset",
        }
    }
}

impl std::fmt::Display for SessionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
