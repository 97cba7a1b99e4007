//! Goroutine recover application layer

mod analyzer;
mod recovery;
mod resolver;
mod safety;
mod scope;

pub use analyzer::GoroutineAnalyzer;
pub use recovery::RecoveryPredicate;
pub use resolver::CallTargetResolver;
pub use safety::FunctionSafetyChecker;
pub use scope::{find_local_binding, LocalBinding};
