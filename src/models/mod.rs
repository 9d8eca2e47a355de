pub mod config;

pub use config::{MatrixConfig, CONFIG_ENV_VAR};
