//! pixel-arith: saturating 8-bit pixel arithmetic
//!
//! Small building blocks for error-diffusion code working on 8-bit
//! grayscale levels.
//!
//! # Quick Start
//!
//! ```
//! use pixel_arith::{saturating_add, ThresholdMatrix};
//!
//! let matrix = ThresholdMatrix::default();
//! let q = matrix.quantize(100);
//! assert_eq!(q.value, 0);
//! assert_eq!(q.error, 100);
//!
//! // hand one eighth of the error to a neighbour
//! assert_eq!(saturating_add(90, q.diffused(3)), 102);
//! ```
//!
//! # Saturating Addition
//!
//! [`saturating_add()`] applies a signed `i32` error term to a `u8` pixel.
//! The sum is formed in a wider signed domain before clamping, so neither a
//! large positive nor a large negative error can wrap around:
//!
//! ```text
//! base + error <= 0    ->  0
//! base + error >= 255  ->  255
//! otherwise            ->  base + error
//! ```
//!
//! # Threshold Tables
//!
//! [`ThresholdMatrix`] is an owned `[u8; 256]` indexed by `u8`. Every index
//! is valid, so lookups never fail and need no bounds policy. Construction
//! from untyped input (slices, float thresholds) reports [`MatrixError`].
//!
//! | Constructor | Table |
//! |-------------|-------|
//! | [`ThresholdMatrix::default()`] | below 128 -> 0, else 255 |
//! | [`ThresholdMatrix::from_cutoff()`] | below `cutoff` -> 0, else 255 |
//! | [`ThresholdMatrix::from_threshold()`] | same, from an `f32` setting |
//! | [`ThresholdMatrix::from_fn()`] | arbitrary mapping |
//!
//! For tables rewritten while other threads read them, use
//! [`SharedThresholdMatrix`].

pub mod arith;
pub mod threshold;


pub use arith::{apply_error, min, saturating_add, PIXEL_MAX};
pub use threshold::{
    MatrixError, Quantized, SharedThresholdMatrix, ThresholdMatrix, DEFAULT_CUTOFF,
};
