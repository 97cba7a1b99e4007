//! Parsing Feature
//!
//! Responsible for turning Go files into parsed source units grouped by
//! package, and for the generic syntax traversal used by every later stage.
//!
//! ## Structure
//! - `domain/` - SourceUnit, GoPackage, SyntaxRef
//! - `ports/` - SourceParser trait
//! - `infrastructure/` - GoParser (tree-sitter-go), PackageLoader, inspector

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{is_test_file, kinds, GoPackage, SourceUnit, SpanExt, SyntaxRef};
pub use infrastructure::{inspect, GoParser, PackageLoader, Visit};
pub use ports::SourceParser;
