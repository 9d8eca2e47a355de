//! Threshold lookup tables.
//!
//! A [`ThresholdMatrix`] maps each of the 256 input levels to an output
//! level. It is an owned value: build it once, then pass it by reference or
//! wrap it in a [`SharedThresholdMatrix`] when several threads need to read
//! and rewrite it.

mod error;
mod matrix;
mod shared;

pub use error::MatrixError;
pub use matrix::{Quantized, ThresholdMatrix, DEFAULT_CUTOFF};
pub use shared::SharedThresholdMatrix;
