//! Shared models

mod span;

pub use crate::errors::{RecoverError, Result};
pub use span::{Location, Span};
