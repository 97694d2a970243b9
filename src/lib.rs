//! # Lifesynth
//!
//! Multi-session toroidal Game-of-Life simulation engine.
//!
//! Lifesynth runs many independent cellular-automaton simulations side by
//! side, one per opaque session identifier, and hands each caller a
//! consistent view of its own grid. Cells carry a four-state encoding
//! (`Dead`, `Alive`, `Born`, `Dying`) so clients can animate births and
//! deaths without re-deriving them.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lifesynth::prelude::*;
//!
//! let synth = Lifesynth::new();
//!
//! // Seed a blinker and advance one generation
//! synth.mutate(Some("session_a"), &MutateRequest::toggle(7, 6))?;
//! synth.mutate(Some("session_a"), &MutateRequest::toggle(7, 7))?;
//! synth.mutate(Some("session_a"), &MutateRequest::toggle(7, 8))?;
//! let after = synth.mutate(Some("session_a"), &MutateRequest::step())?;
//! assert_eq!(after.step_counter, 1);
//!
//! // Other sessions are untouched
//! let other = synth.read_grid(Some("session_b"))?;
//! assert_eq!(other.step_counter, 0);
//! ```
//!
//! ## Layers
//!
//! - `lifesynth-engine`: the pure transition rule (`step`, `toggle`,
//!   `empty`)
//! - `lifesynth-store`: the concurrency-safe session map with retention
//! - `lifesynth-wire`: the JSON request/response shapes for a dispatcher
//! - this crate: the [`Lifesynth`] facade tying them together
//!
//! The HTTP layer in front of all this is deliberately out of scope: a
//! dispatcher decodes transport requests, calls [`Lifesynth::read_grid`] or
//! [`Lifesynth::mutate`], and encodes the returned snapshot or error.

#![warn(missing_docs)]

mod simulator;

pub mod prelude;

// Re-export main entry points
pub use simulator::{Lifesynth, LifesynthBuilder, SessionScope};

// Re-export the shared model
pub use lifesynth_core::{
    CellState, Error, Grid, Result, SessionAction, SessionId, SessionSnapshot, DEFAULT_GRID_SIZE,
};

// Re-export store configuration
pub use lifesynth_store::{RetentionPolicy, SessionStore};

// Re-export wire shapes
pub use lifesynth_wire::{ErrorResponse, GridResponse, MutateRequest};
