//! Geometric and numeric math kernel: vectors, matrices, quaternions, exact
//! rationals, interpolation and batch numeric passes.
//!
//! Every type here is a plain value. Nothing allocates beyond locals (except
//! the batch helpers that explicitly hand back a fresh `Vec`) and nothing holds
//! shared state, so values can be copied freely across threads.

pub mod batch;
pub mod error;
pub mod interpolation;
pub mod math;

pub use error::{MathError, MathResult};
