//! Session identity and read view
//!
//! A session is an isolated simulation instance keyed by an opaque
//! identifier the caller supplies. The store owns the live state; callers
//! only ever see [`SessionSnapshot`] copies.

use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a simulation session.
///
/// The identifier is supplied by the caller and trusted as-is; the core
/// never authenticates it. Two equal identifiers address the same session.
///
/// # Examples
///
/// ```
/// use lifesynth_core::SessionId;
///
/// let a = SessionId::new("session_k3j9x");
/// let b = SessionId::from("session_k3j9x");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "session_k3j9x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        SessionId(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        SessionId(id.to_string())
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        SessionId(id)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point-in-time view of one session's state.
///
/// Returned by every read and mutation; an owned copy, so holding one never
/// blocks or aliases the session it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The session's grid at the time of the call.
    pub grid: Grid,
    /// Number of `step` actions applied since creation or the last reset.
    pub step_counter: u64,
}
