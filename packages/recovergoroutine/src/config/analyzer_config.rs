//! `AnalyzerConfig` - the only value shared across packages in one run

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Help text of the `recover` option
pub const RECOVER_OPTION_HELP: &str = "You can use this option when you want to call a method \
defined in a struct or use CustomRecover declared in an external package.";

/// Analyzer configuration
///
/// Immutable for the duration of a run and passed by reference into the
/// recovery predicate; nothing reads it from ambient state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Name of a function or method treated as equivalent to `recover()`
    /// without inspecting its body. Empty means unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recover: Option<String>,

    /// Skip `_test.go` files during package discovery
    pub skip_tests: bool,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: AnalyzerConfig = serde_yaml::from_str(yaml)?;
        config.validate()
    }

    /// Load a YAML configuration file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Override the custom recover name (an empty name clears it)
    pub fn with_recover(mut self, name: impl Into<String>) -> ConfigResult<Self> {
        self.recover = Some(name.into());
        self.validate()
    }

    pub fn with_skip_tests(mut self, skip: bool) -> Self {
        self.skip_tests = skip;
        self
    }

    /// The configured custom recover name, if any
    pub fn custom_recover(&self) -> Option<&str> {
        self.recover.as_deref().filter(|name| !name.is_empty())
    }

    /// Normalize an empty name to unset and reject non-identifiers
    fn validate(mut self) -> ConfigResult<Self> {
        match self.recover.as_deref() {
            Some("") => self.recover = None,
            Some(name) if !is_go_identifier(name) => {
                return Err(ConfigError::InvalidRecoverName(name.to_string()))
            }
            _ => {}
        }
        Ok(self)
    }
}

fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
