//! Owned 256-entry threshold lookup table.

use std::ops::{Index, IndexMut};

use super::MatrixError;
use crate::arith::PIXEL_MAX;

/// Cutoff used by [`ThresholdMatrix::default()`].
pub const DEFAULT_CUTOFF: u8 = 128;

/// A lookup table mapping every 8-bit input level to an output level.
///
/// The table always holds exactly [`ThresholdMatrix::LEN`] entries and is
/// indexed by `u8`, so there is no such thing as an out-of-range index.
///
/// ```
/// use pixel_arith::ThresholdMatrix;
///
/// let matrix = ThresholdMatrix::from_cutoff(128);
/// assert_eq!(matrix[127], 0);
/// assert_eq!(matrix[128], 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThresholdMatrix {
    entries: [u8; 256],
}

/// Result of passing a pixel through a [`ThresholdMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantized {
    /// Output level looked up in the table
    pub value: u8,
    /// Quantization error: input minus output
    pub error: i32,
}

impl Quantized {
    /// Error scaled down by `2^shift` using an arithmetic shift.
    ///
    /// Atkinson diffusion hands `error >> 3` (one eighth) to each of its six
    /// neighbours. Negative errors round toward negative infinity.
    #[inline]
    pub fn diffused(&self, shift: u32) -> i32 {
        self.error >> shift.min(31)
    }
}

impl ThresholdMatrix {
    /// Number of entries in every matrix.
    pub const LEN: usize = 256;

    /// A table with every entry set to `0`.
    pub const fn zeroed() -> Self {
        Self { entries: [0; 256] }
    }

    /// Wrap an existing table.
    pub const fn from_array(entries: [u8; 256]) -> Self {
        Self { entries }
    }

    /// Build a table by evaluating `f` for each input level.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(u8) -> u8,
    {
        let mut entries = [0u8; 256];
        for (level, entry) in entries.iter_mut().enumerate() {
            *entry = f(level as u8);
        }
        Self { entries }
    }

    /// Two-level table: inputs below `cutoff` map to `0`, the rest to `255`.
    ///
    /// A cutoff of `0` maps everything to white.
    pub const fn from_cutoff(cutoff: u8) -> Self {
        Self::from_boundary(cutoff as u16)
    }

    /// Two-level table from a floating-point threshold.
    ///
    /// The threshold is truncated toward zero, so `128.0` and `128.9` behave
    /// like [`from_cutoff(128)`](Self::from_cutoff). `256.0` maps every input
    /// to black.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidThreshold`] if `threshold` is NaN or
    /// outside `0.0..=256.0`.
    pub fn from_threshold(threshold: f32) -> Result<Self, MatrixError> {
        if threshold.is_nan() || !(0.0..=256.0).contains(&threshold) {
            return Err(MatrixError::InvalidThreshold(threshold));
        }
        Ok(Self::from_boundary(threshold as u16))
    }

    const fn from_boundary(boundary: u16) -> Self {
        let mut entries = [0u8; 256];
        let mut level = 0;
        while level < 256 {
            if level as u16 >= boundary {
                entries[level] = PIXEL_MAX;
            }
            level += 1;
        }
        Self { entries }
    }

    /// Entry for input level `index`.
    #[inline]
    pub const fn get(&self, index: u8) -> u8 {
        self.entries[index as usize]
    }

    /// Overwrite the entry for input level `index`.
    #[inline]
    pub fn set(&mut self, index: u8, value: u8) {
        self.entries[index as usize] = value;
    }

    /// Look up the output level for `value`.
    #[inline]
    pub const fn map(&self, value: u8) -> u8 {
        self.get(value)
    }

    /// Look up `value` and report the quantization error alongside it.
    #[inline]
    pub fn quantize(&self, value: u8) -> Quantized {
        let mapped = self.map(value);
        Quantized {
            value: mapped,
            error: i32::from(value) - i32::from(mapped),
        }
    }

    /// Borrow the underlying table.
    pub const fn as_array(&self) -> &[u8; 256] {
        &self.entries
    }

    /// Consume the matrix, returning the table.
    pub const fn into_array(self) -> [u8; 256] {
        self.entries
    }

    /// Iterate over `(input level, output level)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(level, &out)| (level as u8, out))
    }
}

impl Default for ThresholdMatrix {
    fn default() -> Self {
        Self::from_cutoff(DEFAULT_CUTOFF)
    }
}

impl Index<u8> for ThresholdMatrix {
    type Output = u8;

    #[inline]
    fn index(&self, index: u8) -> &u8 {
        &self.entries[index as usize]
    }
}

impl IndexMut<u8> for ThresholdMatrix {
    #[inline]
    fn index_mut(&mut self, index: u8) -> &mut u8 {
        &mut self.entries[index as usize]
    }
}

impl From<[u8; 256]> for ThresholdMatrix {
    fn from(entries: [u8; 256]) -> Self {
        Self::from_array(entries)
    }
}

impl TryFrom<&[u8]> for ThresholdMatrix {
    type Error = MatrixError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let entries: [u8; 256] = slice.try_into().map_err(|_| MatrixError::LengthMismatch {
            expected: Self::LEN,
            actual: slice.len(),
        })?;
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_is_256() {
        let matrix = ThresholdMatrix::default();
        assert_eq!(ThresholdMatrix::LEN, 256);
        assert_eq!(matrix.as_array().len(), 256);
        assert_eq!(matrix.iter().count(), 256);
    }

    #[test]
    fn test_every_u8_index_is_valid() {
        let mut matrix = ThresholdMatrix::zeroed();
        for i in 0..=255u8 {
            matrix[i] = i;
        }
        for i in 0..=255u8 {
            assert_eq!(matrix[i], i);
            assert_eq!(matrix.get(i), i);
        }
    }

    #[test]
    fn test_default_cutoff_128() {
        let matrix = ThresholdMatrix::default();
        assert!((0..128u8).all(|i| matrix[i] == 0));
        assert!((128..=255u8).all(|i| matrix[i] == 255));
    }

    #[test]
    fn test_cutoff_extremes() {
        let white = ThresholdMatrix::from_cutoff(0);
        assert!(white.iter().all(|(_, out)| out == 255));

        let almost_black = ThresholdMatrix::from_cutoff(255);
        assert_eq!(almost_black[254], 0);
        assert_eq!(almost_black[255], 255);
    }

    #[test]
    fn test_from_threshold_truncates() {
        assert_eq!(
            ThresholdMatrix::from_threshold(128.0).unwrap(),
            ThresholdMatrix::from_cutoff(128)
        );
        assert_eq!(
            ThresholdMatrix::from_threshold(128.9).unwrap(),
            ThresholdMatrix::from_cutoff(128)
        );
        assert_eq!(
            ThresholdMatrix::from_threshold(0.0).unwrap(),
            ThresholdMatrix::from_cutoff(0)
        );
    }

    #[test]
    fn test_from_threshold_256_is_all_black() {
        let matrix = ThresholdMatrix::from_threshold(256.0).unwrap();
        assert_eq!(matrix, ThresholdMatrix::zeroed());
    }

    #[test]
    fn test_from_threshold_rejects_out_of_range() {
        assert_eq!(
            ThresholdMatrix::from_threshold(-1.0),
            Err(MatrixError::InvalidThreshold(-1.0))
        );
        assert_eq!(
            ThresholdMatrix::from_threshold(256.5),
            Err(MatrixError::InvalidThreshold(256.5))
        );
        assert!(ThresholdMatrix::from_threshold(f32::NAN).is_err());
        assert!(ThresholdMatrix::from_threshold(f32::INFINITY).is_err());
    }

    #[test]
    fn test_from_fn_identity() {
        let matrix = ThresholdMatrix::from_fn(|level| level);
        assert!(matrix.iter().all(|(input, out)| input == out));
    }

    #[test]
    fn test_try_from_slice() {
        let table = vec![7u8; 256];
        let matrix = ThresholdMatrix::try_from(table.as_slice()).unwrap();
        assert!(matrix.iter().all(|(_, out)| out == 7));

        let short = vec![0u8; 255];
        assert_eq!(
            ThresholdMatrix::try_from(short.as_slice()),
            Err(MatrixError::LengthMismatch {
                expected: 256,
                actual: 255
            })
        );

        let long = vec![0u8; 300];
        assert!(ThresholdMatrix::try_from(long.as_slice()).is_err());
    }

    #[test]
    fn test_array_round_trip() {
        let mut table = [0u8; 256];
        table[42] = 99;
        let matrix = ThresholdMatrix::from(table);
        assert_eq!(matrix.get(42), 99);
        assert_eq!(matrix.into_array(), table);
    }

    #[test]
    fn test_set() {
        let mut matrix = ThresholdMatrix::default();
        matrix.set(10, 200);
        assert_eq!(matrix.map(10), 200);
    }

    #[test]
    fn test_quantize_error() {
        let matrix = ThresholdMatrix::default();

        let dark = matrix.quantize(100);
        assert_eq!(dark, Quantized { value: 0, error: 100 });

        let light = matrix.quantize(200);
        assert_eq!(light, Quantized { value: 255, error: -55 });

        let exact = matrix.quantize(255);
        assert_eq!(exact.error, 0);
    }

    #[test]
    fn test_diffused_shift() {
        let q = Quantized { value: 0, error: 100 };
        assert_eq!(q.diffused(3), 12);
        assert_eq!(q.diffused(0), 100);

        // arithmetic shift rounds toward negative infinity
        let q = Quantized { value: 255, error: -55 };
        assert_eq!(q.diffused(3), -7);

        // oversized shifts do not panic
        assert_eq!(q.diffused(40), -1);
    }
}
