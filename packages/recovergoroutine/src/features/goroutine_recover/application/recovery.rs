//! Recovery predicate
//!
//! A deferred call counts as a recovery when some call inside it
//!  (a) is the builtin `recover()`,
//!  (b) resolves to a package function or method whose own body calls
//!      `recover()` (one level of delegation, never further), or
//!  (c) is named like the configured custom recover function.
//! A selector `x.Name` carrying the custom name anywhere in the deferred
//! expression also counts, called or not.
//! "Inside it" covers the deferred callee and, for `defer func() {...}()`,
//! the literal's body, but never a goroutine launched from there.

use tracing::trace;

use super::resolver::CallTargetResolver;
use super::scope::find_local_binding;
use crate::config::AnalyzerConfig;
use crate::features::goroutine_recover::domain::CallTarget;
use crate::features::parsing::{inspect, kinds, SyntaxRef, Visit};
use crate::shared::models::Result;

/// Decides whether a deferred call expression recovers panics
#[derive(Debug, Clone, Copy)]
pub struct RecoveryPredicate<'a, 't> {
    resolver: CallTargetResolver<'a, 't>,
    config: &'a AnalyzerConfig,
}

impl<'a, 't> RecoveryPredicate<'a, 't> {
    pub fn new(resolver: CallTargetResolver<'a, 't>, config: &'a AnalyzerConfig) -> Self {
        Self { resolver, config }
    }

    /// Does the deferred expression reach a recovery?
    pub fn is_recovery(&self, deferred: SyntaxRef<'t>) -> Result<bool> {
        let mut outcome = Ok(false);
        inspect(deferred.node, |node| match node.kind() {
            kinds::GO_STATEMENT => Visit::Skip,
            kinds::CALL_EXPRESSION => match self.call_recovers(deferred.with_node(node)) {
                Ok(false) => Visit::Descend,
                Ok(true) => {
                    outcome = Ok(true);
                    Visit::Stop
                }
                Err(err) => {
                    outcome = Err(err);
                    Visit::Stop
                }
            },
            // `x.Name` with the custom name counts even when not called here
            kinds::SELECTOR_EXPRESSION if self.is_custom_recover(deferred.with_node(node)) => {
                outcome = Ok(true);
                Visit::Stop
            }
            _ => Visit::Descend,
        });
        outcome
    }

    fn call_recovers(&self, call: SyntaxRef<'t>) -> Result<bool> {
        let Some(callee) = call.field(kinds::FIELD_FUNCTION).map(unparenthesize) else {
            return Ok(false);
        };
        if self.is_builtin_recover(callee) || self.is_custom_recover(callee) {
            return Ok(true);
        }

        // One level: the helper's body must call recover itself
        match self.resolver.resolve_callee(callee) {
            CallTarget::NamedFunction { decl } | CallTarget::Method { decl, .. } => {
                let recovers = self.body_calls_recover(decl.body()?);
                trace!("helper {} calls recover: {}", decl.qualified_name(), recovers);
                Ok(recovers)
            }
            CallTarget::InlineFunction { .. } | CallTarget::Unresolved { .. } => Ok(false),
        }
    }

    /// Any direct call to `recover` (or the custom name) within `body`
    fn body_calls_recover(&self, body: SyntaxRef<'t>) -> bool {
        inspect(body.node, |node| match node.kind() {
            kinds::GO_STATEMENT => Visit::Skip,
            kinds::CALL_EXPRESSION => {
                let call = body.with_node(node);
                match call.field(kinds::FIELD_FUNCTION).map(unparenthesize) {
                    Some(callee)
                        if self.is_builtin_recover(callee) || self.is_custom_recover(callee) =>
                    {
                        Visit::Stop
                    }
                    _ => Visit::Descend,
                }
            }
            _ => Visit::Descend,
        })
    }

    /// `recover` not shadowed by a local, a package function, var or const
    fn is_builtin_recover(&self, callee: SyntaxRef<'t>) -> bool {
        callee.kind() == kinds::IDENTIFIER
            && callee.text() == kinds::RECOVER_BUILTIN
            && self.resolver.index().function(kinds::RECOVER_BUILTIN).is_none()
            && !self.resolver.index().has_value(kinds::RECOVER_BUILTIN)
            && find_local_binding(callee).is_none()
    }

    /// `Name()` or `x.Name()` with the configured name
    fn is_custom_recover(&self, callee: SyntaxRef<'t>) -> bool {
        let Some(custom) = self.config.custom_recover() else {
            return false;
        };
        let name = match callee.kind() {
            kinds::IDENTIFIER => Some(callee),
            kinds::SELECTOR_EXPRESSION => callee.field(kinds::FIELD_FIELD),
            _ => None,
        };
        name.map(|n| n.text() == custom).unwrap_or(false)
    }
}

fn unparenthesize(mut expr: SyntaxRef<'_>) -> SyntaxRef<'_> {
    while expr.kind() == kinds::PARENTHESIZED_EXPRESSION {
        match expr.named_child(0) {
            Some(inner) => expr = inner,
            None => break,
        }
    }
    expr
}
