//! Goroutine recover domain models

mod call_target;
mod diagnostic;

pub use call_target::{CallTarget, LaunchVerdict, UnresolvedReason};
pub use diagnostic::{Diagnostic, DIAGNOSTIC_CATEGORY, DIAGNOSTIC_MESSAGE};
