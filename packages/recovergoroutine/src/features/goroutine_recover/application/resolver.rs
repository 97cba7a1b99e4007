//! Call-target resolution
//!
//! Turns the callee of a launch (or of a deferred call) into a
//! `CallTarget`. Three shapes resolve: a function literal, an identifier
//! naming a package function, and `recv.Method` with `recv` of static type
//! `*T`. Everything else is `Unresolved`.

use tracing::debug;

use super::scope::find_local_binding;
use crate::features::goroutine_recover::domain::{CallTarget, UnresolvedReason};
use crate::features::parsing::{kinds, SyntaxRef};
use crate::features::symbol_index::{DeclIndex, StaticType};

/// Resolver over one package's declaration index
#[derive(Debug, Clone, Copy)]
pub struct CallTargetResolver<'a, 't> {
    index: &'a DeclIndex<'t>,
}

impl<'a, 't> CallTargetResolver<'a, 't> {
    pub fn new(index: &'a DeclIndex<'t>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a DeclIndex<'t> {
        self.index
    }

    /// Resolve what a `go` statement launches
    pub fn resolve_launch(&self, launch: SyntaxRef<'t>) -> CallTarget<'t> {
        let call = launch
            .named_children()
            .into_iter()
            .find(|child| child.kind() == kinds::CALL_EXPRESSION);
        let target = match call.and_then(|call| call.field(kinds::FIELD_FUNCTION)) {
            Some(callee) => self.resolve_callee(callee),
            None => CallTarget::unresolved(UnresolvedReason::NotACall),
        };

        debug!(
            "{}:{}: go → {}",
            launch.path().display(),
            launch.span().start(),
            target.describe()
        );
        target
    }

    /// Resolve the function expression of a call
    pub fn resolve_callee(&self, callee: SyntaxRef<'t>) -> CallTarget<'t> {
        match callee.kind() {
            kinds::FUNC_LITERAL => CallTarget::InlineFunction { literal: callee },
            kinds::PARENTHESIZED_EXPRESSION => match callee.named_child(0) {
                Some(inner) => self.resolve_callee(inner),
                None => CallTarget::unresolved(UnresolvedReason::UnsupportedCallee(callee.kind())),
            },
            kinds::IDENTIFIER => self.resolve_function(callee),
            kinds::SELECTOR_EXPRESSION => self.resolve_method(callee),
            other => CallTarget::unresolved(UnresolvedReason::UnsupportedCallee(other)),
        }
    }

    fn resolve_function(&self, ident: SyntaxRef<'t>) -> CallTarget<'t> {
        let name = ident.text();
        // A local of the same name shadows the package function
        if find_local_binding(ident).is_some() {
            return CallTarget::unresolved(UnresolvedReason::FunctionValue(name.to_string()));
        }
        match self.index.function(name) {
            Some(decl) => CallTarget::NamedFunction { decl: *decl },
            None => CallTarget::unresolved(UnresolvedReason::UnknownFunction(name.to_string())),
        }
    }

    fn resolve_method(&self, selector: SyntaxRef<'t>) -> CallTarget<'t> {
        let (Some(mut operand), Some(field)) = (
            selector.field(kinds::FIELD_OPERAND),
            selector.field(kinds::FIELD_FIELD),
        ) else {
            return CallTarget::unresolved(UnresolvedReason::UnsupportedCallee(selector.kind()));
        };
        while operand.kind() == kinds::PARENTHESIZED_EXPRESSION {
            match operand.named_child(0) {
                Some(inner) => operand = inner,
                None => break,
            }
        }
        if operand.kind() != kinds::IDENTIFIER {
            return CallTarget::unresolved(UnresolvedReason::UnsupportedReceiver(operand.kind()));
        }

        let Some(receiver) = self.receiver_type(operand) else {
            return CallTarget::unresolved(UnresolvedReason::UnknownReceiverType(
                operand.text().to_string(),
            ));
        };
        if !receiver.pointer {
            return CallTarget::unresolved(UnresolvedReason::NotPointerReceiver(receiver));
        }

        match self.index.method(&receiver.name, field.text()) {
            Some(decl) => CallTarget::Method {
                decl: *decl,
                receiver,
            },
            None => CallTarget::unresolved(UnresolvedReason::UnknownMethod {
                type_name: receiver.name,
                method: field.text().to_string(),
            }),
        }
    }

    /// Declared static type of a receiver identifier
    pub fn receiver_type(&self, ident: SyntaxRef<'t>) -> Option<StaticType> {
        match find_local_binding(ident) {
            Some(binding) => binding.static_type(self.index),
            None => self.index.variable_type(ident.text()),
        }
    }
}
