//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// `recover` is set but is not a Go identifier
    #[error("Invalid custom recover name '{0}': expected a Go identifier such as `Recover` or `safeRecover`")]
    InvalidRecoverName(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
