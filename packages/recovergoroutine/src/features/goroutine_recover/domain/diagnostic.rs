//! Diagnostic produced for an unsafe launch

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::shared::models::{Location, Span};

/// Category of every diagnostic this analyzer emits
pub const DIAGNOSTIC_CATEGORY: &str = "goroutine";

/// Fixed message of every diagnostic this analyzer emits
pub const DIAGNOSTIC_MESSAGE: &str = "goroutine must have recover";

/// One finding, positioned at the `go` keyword of the launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub file: PathBuf,
    #[serde(flatten)]
    pub location: Location,
    pub category: String,
    pub message: String,
}

impl Diagnostic {
    pub fn unrecovered_goroutine(file: impl Into<PathBuf>, span: Span) -> Self {
        Self {
            file: file.into(),
            location: span.start(),
            category: DIAGNOSTIC_CATEGORY.to_string(),
            message: DIAGNOSTIC_MESSAGE.to_string(),
        }
    }

    pub fn line(&self) -> u32 {
        self.location.line
    }

    pub fn column(&self) -> u32 {
        self.location.column
    }
}

/// `path:line:col: message`, as go vet prints it
impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.file.display(),
            self.location,
            self.message
        )
    }
}
