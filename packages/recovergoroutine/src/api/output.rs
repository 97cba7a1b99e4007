//! Rendering diagnostics for the command line

use serde::{Deserialize, Serialize};

use crate::features::goroutine_recover::Diagnostic;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `path:line:col: message`, one per line
    #[default]
    Text,
    /// JSON array of diagnostics
    Json,
}

/// Render diagnostics. Text output is empty when there is nothing to report.
pub fn render(diagnostics: &[Diagnostic], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(diagnostics
            .iter()
            .map(|d| format!("{}\n", d))
            .collect()),
        OutputFormat::Json => serde_json::to_string_pretty(diagnostics).map(|json| json + "\n"),
    }
}
