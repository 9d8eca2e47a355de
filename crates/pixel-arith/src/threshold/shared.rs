//! Thread-safe handle to a threshold matrix.

use std::sync::{Arc, PoisonError, RwLock};

use super::{Quantized, ThresholdMatrix};

/// A [`ThresholdMatrix`] that can be read and rewritten from several threads.
///
/// Cloning the handle shares the same table. Readers either take a copy with
/// [`snapshot()`](Self::snapshot) or perform a single locked lookup; writers
/// go through [`replace()`](Self::replace) or [`update()`](Self::update).
///
/// Poisoned locks are recovered rather than propagated.
#[derive(Debug, Clone, Default)]
pub struct SharedThresholdMatrix {
    inner: Arc<RwLock<ThresholdMatrix>>,
}

impl SharedThresholdMatrix {
    pub fn new(matrix: ThresholdMatrix) -> Self {
        Self {
            inner: Arc::new(RwLock::new(matrix)),
        }
    }

    /// Copy of the current table.
    pub fn snapshot(&self) -> ThresholdMatrix {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a single value under the read lock.
    pub fn lookup(&self, value: u8) -> u8 {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .map(value)
    }

    /// Quantize a single value under the read lock.
    pub fn quantize(&self, value: u8) -> Quantized {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .quantize(value)
    }

    /// Swap in a new table, returning the previous one.
    pub fn replace(&self, matrix: ThresholdMatrix) -> ThresholdMatrix {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, matrix)
    }

    /// Edit the table in place under the write lock.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ThresholdMatrix) -> R,
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}

impl From<ThresholdMatrix> for SharedThresholdMatrix {
    fn from(matrix: ThresholdMatrix) -> Self {
        Self::new(matrix)
    }
}
