//! Symbol Index Feature
//!
//! One pre-pass per package collects package-level functions, methods keyed
//! by (receiver type, name) and package-level variables. Launch resolution
//! then looks declarations up here instead of re-reading source files.

mod decl_index;
mod static_type;

pub use decl_index::{DeclIndex, FuncDecl};
pub use static_type::StaticType;

pub(crate) use decl_index::var_specs;
