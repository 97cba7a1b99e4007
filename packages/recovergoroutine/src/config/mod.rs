//! Analyzer configuration
//!
//! Precedence, lowest to highest: defaults → YAML file → CLI flags.
//!
//! ```rust,ignore
//! use recovergoroutine::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::from_yaml_file("recovergoroutine.yaml")?
//!     .with_recover("Recover")?;
//! ```

pub mod analyzer_config;
pub mod error;

// Re-exports
pub use analyzer_config::{AnalyzerConfig, RECOVER_OPTION_HELP};
pub use error::{ConfigError, ConfigResult};
