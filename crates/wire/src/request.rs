//! Mutation request decoding

use lifesynth_core::{Error, Result, SessionAction};
use serde::{Deserialize, Serialize};

/// Body of a mutation request: `{"action": "...", "cell": [row, col]}`.
///
/// The `cell` field is only meaningful for `"toggle"` and may be omitted
/// otherwise. Decoding is lenient about the action keyword; validation
/// happens in [`MutateRequest::action`], so an unknown keyword is reported
/// as `InvalidAction` rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutateRequest {
    /// Action keyword: `toggle`, `step`, or `reset`.
    pub action: String,
    /// Target cell for `toggle`, as `[row, col]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<[usize; 2]>,
}

impl MutateRequest {
    /// A toggle request for one cell.
    pub fn toggle(row: usize, col: usize) -> Self {
        Self {
            action: "toggle".to_string(),
            cell: Some([row, col]),
        }
    }

    /// A step request.
    pub fn step() -> Self {
        Self {
            action: "step".to_string(),
            cell: None,
        }
    }

    /// A reset request.
    pub fn reset() -> Self {
        Self {
            action: "reset".to_string(),
            cell: None,
        }
    }

    /// Decode a request body from JSON.
    ///
    /// A body that is not valid JSON, or does not match the request shape,
    /// is a caller error (`InvalidPayload`), not an internal failure.
    pub fn decode(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidPayload(e.to_string()))
    }

    /// Validate and convert to the typed action.
    pub fn action(&self) -> Result<SessionAction> {
        SessionAction::parse(&self.action, self.cell)
    }
}
