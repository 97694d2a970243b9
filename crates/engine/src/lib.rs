//! Transition engine for lifesynth
//!
//! Pure functions computing the next grid generation and single-cell edits.
//! The engine holds no state and performs no I/O: every function is a total,
//! deterministic map from input grid to output grid, so the store above it
//! can serialize calls per session without any coordination down here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod rules;

pub use rules::{empty, step, toggle};
