//! Parser port (interface)
//!
//! Defines the contract for parsing source code.

use std::path::Path;

use crate::features::parsing::domain::SourceUnit;
use crate::shared::models::Result;

/// Parser trait - abstraction over parsing implementation
pub trait SourceParser: Send + Sync {
    /// Parse source code into a SourceUnit, failing on any syntax error
    fn parse(&self, source: String, path: &Path) -> Result<SourceUnit>;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
