//! Pixelkit - saturating pixel arithmetic
//!
//! Configuration, logging and a CLI around the `pixel-arith` core.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use pixel_arith::{
    apply_error, min, saturating_add, MatrixError, Quantized, SharedThresholdMatrix,
    ThresholdMatrix, DEFAULT_CUTOFF,
};
