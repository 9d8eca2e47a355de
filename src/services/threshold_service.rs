use crate::error::ConfigError;
use crate::models::MatrixConfig;
use pixel_arith::{Quantized, SharedThresholdMatrix, ThresholdMatrix};

/// Per-pixel result of [`ThresholdService::quantize_pixels`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelReport {
    pub input: u8,
    pub output: u8,
    pub error: i32,
    /// Error after the configured diffusion shift
    pub diffused: i32,
}

/// Owns the active threshold matrix and applies it to pixel buffers.
///
/// Cloning the service shares the matrix, so a [`reload`](Self::reload) is
/// visible to every clone.
#[derive(Debug, Clone)]
pub struct ThresholdService {
    matrix: SharedThresholdMatrix,
    diffusion_shift: u32,
}

impl ThresholdService {
    pub fn new(matrix: ThresholdMatrix, diffusion_shift: u32) -> Self {
        Self {
            matrix: SharedThresholdMatrix::new(matrix),
            diffusion_shift,
        }
    }

    pub fn from_config(config: &MatrixConfig) -> Result<Self, ConfigError> {
        let matrix = config.build()?;
        tracing::info!(
            threshold = ?config.threshold,
            explicit_entries = config.entries.is_some(),
            diffusion_shift = config.diffusion_shift,
            "Threshold service initialized"
        );
        Ok(Self::new(matrix, config.diffusion_shift))
    }

    /// Rebuild the matrix from `config` and swap it in.
    ///
    /// On error the current matrix stays active.
    pub fn reload(&self, config: &MatrixConfig) -> Result<(), ConfigError> {
        let matrix = config.build()?;
        let previous = self.matrix.replace(matrix);
        tracing::info!(changed = previous != matrix, "Threshold matrix reloaded");
        Ok(())
    }

    pub fn matrix(&self) -> ThresholdMatrix {
        self.matrix.snapshot()
    }

    pub fn diffusion_shift(&self) -> u32 {
        self.diffusion_shift
    }

    pub fn quantize(&self, value: u8) -> Quantized {
        self.matrix.quantize(value)
    }

    /// Map every pixel through the matrix in place.
    pub fn map_pixels(&self, pixels: &mut [u8]) {
        // one snapshot per buffer keeps the whole buffer on a single table
        let matrix = self.matrix.snapshot();
        for pixel in pixels.iter_mut() {
            *pixel = matrix.map(*pixel);
        }
        tracing::debug!(pixels = pixels.len(), "Mapped pixel buffer");
    }

    /// Quantize every pixel, reporting the error terms alongside the output.
    pub fn quantize_pixels(&self, pixels: &[u8]) -> Vec<PixelReport> {
        let matrix = self.matrix.snapshot();
        let reports: Vec<PixelReport> = pixels
            .iter()
            .map(|&input| {
                let q = matrix.quantize(input);
                PixelReport {
                    input,
                    output: q.value,
                    error: q.error,
                    diffused: q.diffused(self.diffusion_shift),
                }
            })
            .collect();
        tracing::debug!(pixels = reports.len(), "Quantized pixel buffer");
        reports
    }
}

impl Default for ThresholdService {
    fn default() -> Self {
        Self::new(ThresholdMatrix::default(), MatrixConfig::default().diffusion_shift)
    }
}
