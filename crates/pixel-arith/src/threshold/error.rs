//! Error types for threshold matrix construction

use std::fmt;

/// Error type for building a [`ThresholdMatrix`](super::ThresholdMatrix)
/// from untyped input.
///
/// Indexing and lookups never fail; only conversions from slices and
/// floating-point thresholds can.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Input table does not have exactly 256 entries
    LengthMismatch {
        /// Required number of entries
        expected: usize,
        /// Number of entries supplied
        actual: usize,
    },
    /// Threshold is NaN or outside `0.0..=256.0`
    InvalidThreshold(f32),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "threshold matrix length mismatch: expected {} entries, got {}",
                    expected, actual
                )
            }
            MatrixError::InvalidThreshold(value) => {
                write!(f, "invalid threshold {} (expected 0.0..=256.0)", value)
            }
        }
    }
}

impl std::error::Error for MatrixError {}
