use pixel_arith::MatrixError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("Config serialize error: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Config sets both `threshold` and `entries`; pick one")]
    AmbiguousSource,

    #[error("Invalid threshold matrix: {0}")]
    Matrix(#[from] MatrixError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_io() {
        let error = ConfigError::Io {
            path: PathBuf::from("/nope/pixelkit.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read config /nope/pixelkit.yaml: missing"
        );
    }

    #[test]
    fn test_config_error_already_exists() {
        let error = ConfigError::AlreadyExists(PathBuf::from("/tmp/out.yaml"));
        assert_eq!(
            error.to_string(),
            "/tmp/out.yaml already exists (use --force to overwrite)"
        );
    }

    #[test]
    fn test_config_error_ambiguous() {
        let error = ConfigError::AmbiguousSource;
        assert_eq!(
            error.to_string(),
            "Config sets both `threshold` and `entries`; pick one"
        );
    }

    #[test]
    fn test_config_error_from_matrix_error() {
        let matrix_error = MatrixError::LengthMismatch {
            expected: 256,
            actual: 3,
        };
        let error: ConfigError = matrix_error.into();
        match &error {
            ConfigError::Matrix(_) => {}
            _ => panic!("Expected Matrix variant"),
        }
        assert_eq!(
            error.to_string(),
            "Invalid threshold matrix: threshold matrix length mismatch: expected 256 entries, got 3"
        );
    }

    #[test]
    fn test_config_error_parse() {
        let yaml_error = serde_yaml::from_str::<u8>("[not, a, number]").unwrap_err();
        let error = ConfigError::Parse(yaml_error);
        assert!(error.to_string().starts_with("Config parse error: "));
    }
}
