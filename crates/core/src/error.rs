//! Unified error types for lifesynth.
//!
//! All failures are returned as values; nothing in the core unwinds across
//! the API boundary. The dispatcher that sits in front of the library maps
//! these onto its transport's status codes.

use thiserror::Error;

/// All lifesynth errors.
///
/// Caller mistakes (`InvalidAction`, `MissingSessionId`, `InvalidPayload`)
/// are recoverable and leave session state untouched. `Internal` marks an
/// invariant violation and is never used for caller input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Unrecognized action keyword in a mutation request.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// Session scoping is enabled but the caller supplied no identifier.
    #[error("missing session identifier")]
    MissingSessionId,

    /// Recognized action with a malformed or missing payload, or a request
    /// body that could not be decoded at all.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Internal error (bug or invariant violation).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for lifesynth operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error was caused by the caller's request.
    ///
    /// Caller errors are recoverable: the request is rejected, the session
    /// is unchanged, and a corrected request can succeed.
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Error::Internal(_))
    }

    /// Check if this is a serious/unrecoverable error.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}
