//! Shared module - Common types and utilities
//!
//! Types shared across all features. No tree-sitter dependency here.

pub mod models;

// Re-exports for convenience
pub use models::*;
