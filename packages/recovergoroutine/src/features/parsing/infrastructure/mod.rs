//! Parsing infrastructure
//!
//! This is where the tree-sitter and walkdir dependencies live.

mod go_parser;
mod inspect;
mod loader;

pub use go_parser::GoParser;
pub use inspect::{inspect, Visit};
pub use loader::PackageLoader;
