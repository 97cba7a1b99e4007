//! Function safety checker
//!
//! A body is safe when it holds a `defer` whose call satisfies the
//! recovery predicate. Nested function literals are searched too (a local
//! helper closure that defers the recovery is the common pattern); nested
//! goroutines are not, their defers protect only themselves.

use super::recovery::RecoveryPredicate;
use crate::features::parsing::{inspect, kinds, SyntaxRef, Visit};
use crate::shared::models::Result;

#[derive(Debug, Clone, Copy)]
pub struct FunctionSafetyChecker<'a, 't> {
    predicate: RecoveryPredicate<'a, 't>,
}

impl<'a, 't> FunctionSafetyChecker<'a, 't> {
    pub fn new(predicate: RecoveryPredicate<'a, 't>) -> Self {
        Self { predicate }
    }

    /// First qualifying defer wins. Errors come from resolving helper
    /// bodies and are never folded into a `false`.
    pub fn is_safe(&self, body: SyntaxRef<'t>) -> Result<bool> {
        let mut outcome = Ok(false);
        inspect(body.node, |node| match node.kind() {
            kinds::GO_STATEMENT => Visit::Skip,
            kinds::DEFER_STATEMENT => {
                let Some(deferred) = body.with_node(node).named_child(0) else {
                    return Visit::Skip;
                };
                match self.predicate.is_recovery(deferred) {
                    Ok(true) => {
                        outcome = Ok(true);
                        Visit::Stop
                    }
                    Ok(false) => Visit::Descend,
                    Err(err) => {
                        outcome = Err(err);
                        Visit::Stop
                    }
                }
            }
            _ => Visit::Descend,
        });
        outcome
    }
}
