//! Error types for recovergoroutine
//!
//! Hard failures only. A launch whose target cannot be resolved is not an
//! error: it is `CallTarget::Unresolved` and gets reported as a diagnostic.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for analysis runs
#[derive(Debug, Error)]
pub enum RecoverError {
    /// A source file or directory could not be read
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A Go source file did not parse cleanly
    #[error("{}:{line}:{column}: parse error: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: u32,
        column: u32,
        message: String,
    },

    /// A resolved declaration's body could not be obtained
    #[error("{}: cannot inspect body of `{name}`: {reason}", path.display())]
    SourceAccess {
        path: PathBuf,
        name: String,
        reason: String,
    },

    /// The tree-sitter grammar could not be loaded
    #[error("Language error: {0}")]
    Language(String),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RecoverError {
    /// Create an IO error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RecoverError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a source access error
    pub fn source_access(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        RecoverError::SourceAccess {
            path: path.into(),
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, RecoverError>;
