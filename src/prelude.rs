//! Convenient imports for Lifesynth.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```ignore
//! use lifesynth::prelude::*;
//!
//! let synth = Lifesynth::new();
//! let snapshot = synth.read_grid(Some("session_a"))?;
//! ```

// Main entry point
pub use crate::simulator::{Lifesynth, LifesynthBuilder, SessionScope};

// Error handling
pub use crate::{Error, Result};

// Core model
pub use crate::{CellState, Grid, SessionAction, SessionId, SessionSnapshot};

// Store configuration
pub use crate::RetentionPolicy;

// Wire shapes
pub use crate::{ErrorResponse, GridResponse, MutateRequest};
