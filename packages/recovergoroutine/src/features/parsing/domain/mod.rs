//! Parsing domain models

mod go_package;
pub mod kinds;
mod source_unit;
mod syntax;

pub use go_package::GoPackage;
pub use source_unit::{is_test_file, SourceUnit};
pub use syntax::{SpanExt, SyntaxRef};
