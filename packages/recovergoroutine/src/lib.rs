/*
 * recovergoroutine - goroutine panic-safety lint for Go sources
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Span, Location)
 * - config/      : AnalyzerConfig (the `recover` option) + YAML loader
 * - features/    : Vertical slices (parsing → symbol_index → goroutine_recover)
 * - api/         : Entry point contract (Analyzer, run_paths, rendering)
 *
 * A `go` statement is reported unless the function it launches defers a
 * call that reaches the builtin recover(), directly or through one named
 * helper.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Language-agnostic entry point
pub mod api;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use api::{Analyzer, AnalysisReport, OutputFormat};
pub use config::AnalyzerConfig;
pub use errors::{RecoverError, Result};
pub use features::goroutine_recover::{Diagnostic, DIAGNOSTIC_CATEGORY, DIAGNOSTIC_MESSAGE};
