use crate::error::ConfigError;
use pixel_arith::{ThresholdMatrix, DEFAULT_CUTOFF};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable consulted when no `--config` path is given
pub const CONFIG_ENV_VAR: &str = "PIXELKIT_CONFIG";

/// Threshold matrix configuration loaded from a YAML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixConfig {
    /// Two-level cutoff: levels below map to black, the rest to white
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f32>,

    /// Explicit 256-entry table (mutually exclusive with `threshold`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<u8>>,

    /// Right shift applied to quantization error when reporting diffusion
    #[serde(default = "default_diffusion_shift")]
    pub diffusion_shift: u32,
}

fn default_threshold() -> f32 {
    DEFAULT_CUTOFF as f32
}

fn default_diffusion_shift() -> u32 {
    3 // Atkinson: one eighth per neighbour
}

impl MatrixConfig {
    /// Config with only a threshold set
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold: Some(threshold),
            ..Self::default()
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::Parse)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(ConfigError::Serialize)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::trace!(path = %path.display(), "Loading config from filesystem");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            threshold = ?config.threshold,
            explicit_entries = config.entries.is_some(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    /// or unreadable.
    ///
    /// Without an explicit path, `PIXELKIT_CONFIG` is consulted.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let env_path = std::env::var_os(CONFIG_ENV_VAR);
        let path = match path {
            Some(path) => path,
            None => match env_path.as_deref() {
                Some(env_path) => Path::new(env_path),
                None => {
                    tracing::debug!("No config path configured, using defaults");
                    return Self::default();
                }
            },
        };

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve the config for a command.
    ///
    /// A path the caller named explicitly must load; any error is returned.
    /// Without one, `PIXELKIT_CONFIG` is tried and failures there fall back
    /// to defaults as in [`load_or_default`](Self::load_or_default).
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => Ok(Self::load_or_default(None)),
        }
    }

    /// Apply command-line overrides.
    ///
    /// A threshold override replaces any explicit `entries` table.
    pub fn with_overrides(mut self, threshold: Option<f32>, shift: Option<u32>) -> Self {
        if let Some(threshold) = threshold {
            self.threshold = Some(threshold);
            self.entries = None;
        }
        if let Some(shift) = shift {
            self.diffusion_shift = shift;
        }
        self
    }

    /// Write the default config (threshold 128) to `path`.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn write_default(path: &Path, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        let yaml = Self::with_threshold(default_threshold()).to_yaml()?;
        std::fs::write(path, yaml).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Wrote default config");
        Ok(())
    }

    /// Build the threshold matrix this config describes.
    ///
    /// Explicit `entries` win over the default threshold; setting both is an
    /// error.
    pub fn build(&self) -> Result<ThresholdMatrix, ConfigError> {
        match (&self.entries, self.threshold) {
            (Some(_), Some(_)) => Err(ConfigError::AmbiguousSource),
            (Some(entries), None) => Ok(ThresholdMatrix::try_from(entries.as_slice())?),
            (None, threshold) => Ok(ThresholdMatrix::from_threshold(
                threshold.unwrap_or_else(default_threshold),
            )?),
        }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            threshold: None,
            entries: None,
            diffusion_shift: default_diffusion_shift(),
        }
    }
}
