/*
 * Goroutine Recover Analysis
 *
 * Reports every `go` statement whose launched function does not defer a
 * call that reaches the builtin recover(). An unrecovered panic inside a
 * goroutine takes the whole process down, not just the goroutine.
 *
 * Architecture:
 * - Domain: CallTarget, UnresolvedReason, LaunchVerdict, Diagnostic
 * - Application:
 *     scope            - lexical lookup of identifiers (receiver types, shadowing)
 *     resolver         - launch callee → CallTarget
 *     recovery         - is a deferred call a recovery?
 *     safety           - does a body defer a recovery?
 *     analyzer         - per-package driver, emits diagnostics
 *
 * Algorithm:
 * - Pre-pass: DeclIndex over all files of the package
 * - Inspect each file; on a go statement resolve, check, report
 * - A reported launch is not descended into; a safe one is, so nested
 *   launches are judged on their own
 *
 * Limits:
 * - One level of named indirection for custom recovery helpers
 * - Receiver types come from declarations only, no alias analysis
 */

pub mod application;
pub mod domain;

// Re-export main types
pub use domain::{
    CallTarget, Diagnostic, LaunchVerdict, UnresolvedReason, DIAGNOSTIC_CATEGORY,
    DIAGNOSTIC_MESSAGE,
};

pub use application::{CallTargetResolver, FunctionSafetyChecker, GoroutineAnalyzer, RecoveryPredicate};
