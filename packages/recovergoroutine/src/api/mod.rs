//! Entry point contract
//!
//! One call per lint run over a set of packages: either all diagnostics or
//! the first hard error. Nothing is written and nothing persists between runs.

mod analyzer;
mod output;

pub use analyzer::{AnalysisReport, Analyzer, ANALYZER_DOC, ANALYZER_NAME};
pub use output::{render, OutputFormat};
