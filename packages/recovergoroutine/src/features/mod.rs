//! Feature modules
//!
//! - `parsing`           : Go front end (tree-sitter-go), packages, inspector
//! - `symbol_index`      : per-package declaration index
//! - `goroutine_recover` : launch resolution, recovery predicate, driver

pub mod goroutine_recover;
pub mod parsing;
pub mod symbol_index;
