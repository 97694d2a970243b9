//! Core types for the lifesynth simulation engine
//!
//! This crate defines the fundamental types shared by every layer:
//! - [`CellState`]: the four-variant cell encoding (alive/dead plus the
//!   transient born/dying animation markers)
//! - [`Grid`]: a square toroidal matrix of cells
//! - [`SessionId`]: opaque caller-supplied session identifier
//! - [`SessionAction`]: the mutations a caller can request
//! - [`Error`]: the canonical error taxonomy
//!
//! No simulation logic lives here; the transition rule belongs to
//! `lifesynth-engine` and session ownership to `lifesynth-store`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod cell;
pub mod error;
pub mod grid;
pub mod session;

pub use action::SessionAction;
pub use cell::CellState;
pub use error::{Error, Result};
pub use grid::{Grid, DEFAULT_GRID_SIZE};
pub use session::{SessionId, SessionSnapshot};
