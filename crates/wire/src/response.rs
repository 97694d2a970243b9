//! Response encoding

use lifesynth_core::{Error, Result, SessionSnapshot};
use serde::{Deserialize, Serialize};

/// Successful response body: `{"grid": [[0,1,...]], "stepCounter": n}`.
///
/// Cells are the numeric codes of the four-state encoding, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse {
    /// N rows of N cell codes each.
    pub grid: Vec<Vec<u8>>,
    /// The session's step counter.
    pub step_counter: u64,
}

impl GridResponse {
    /// Build the wire shape from a session snapshot.
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        Self {
            grid: snapshot
                .grid
                .rows()
                .map(|row| row.iter().map(|cell| cell.code()).collect())
                .collect(),
            step_counter: snapshot.step_counter,
        }
    }

    /// Encode to a JSON string.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Internal(e.to_string()))
    }
}

/// Error response body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    /// Build the wire shape for a recoverable error.
    ///
    /// `InvalidAction` keeps the exact message the observed clients match
    /// on; other errors use their display form.
    pub fn from_error(error: &Error) -> Self {
        let message = match error {
            Error::InvalidAction(_) => "Invalid action".to_string(),
            other => other.to_string(),
        };
        Self { error: message }
    }

    /// Encode to a JSON string.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Internal(e.to_string()))
    }
}
