//! What a launch (or a deferred call) invokes

use crate::features::parsing::{kinds, SyntaxRef};
use crate::features::symbol_index::{FuncDecl, StaticType};
use crate::shared::models::Result;

/// Resolved callee of a call expression
#[derive(Debug, Clone)]
pub enum CallTarget<'t> {
    /// `go func() { ... }()`
    InlineFunction { literal: SyntaxRef<'t> },

    /// `go run()` with `run` declared in the package
    NamedFunction { decl: FuncDecl<'t> },

    /// `go w.run()` with `w` of static type `*Worker`
    Method {
        receiver: StaticType,
        decl: FuncDecl<'t>,
    },

    /// Anything the resolver cannot chase; judged unsafe for launches
    Unresolved { reason: UnresolvedReason },
}

impl<'t> CallTarget<'t> {
    pub fn unresolved(reason: UnresolvedReason) -> Self {
        CallTarget::Unresolved { reason }
    }

    /// Body to inspect; `None` for unresolved targets
    pub fn body(&self) -> Result<Option<SyntaxRef<'t>>> {
        match self {
            CallTarget::InlineFunction { literal } => Ok(literal.field(kinds::FIELD_BODY)),
            CallTarget::NamedFunction { decl } | CallTarget::Method { decl, .. } => {
                decl.body().map(Some)
            }
            CallTarget::Unresolved { .. } => Ok(None),
        }
    }

    /// Short description for logs
    pub fn describe(&self) -> String {
        match self {
            CallTarget::InlineFunction { literal } => {
                format!("func literal at {}", literal.span().start())
            }
            CallTarget::NamedFunction { decl } => format!("func {}", decl.name),
            CallTarget::Method { receiver, decl } => format!("method ({}).{}", receiver, decl.name),
            CallTarget::Unresolved { reason } => format!("unresolved: {}", reason),
        }
    }
}

/// Why a callee could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// The go statement does not launch a call expression
    NotACall,
    /// Identifier is not a package-level function (imported, builtin, undeclared)
    UnknownFunction(String),
    /// Identifier is bound to a local variable or parameter holding a func value
    FunctionValue(String),
    /// Receiver of a selector call has no declared local named type
    UnknownReceiverType(String),
    /// Receiver type is not a pointer to a named type
    NotPointerReceiver(StaticType),
    /// Receiver type has no such method in this package
    UnknownMethod { type_name: String, method: String },
    /// Receiver is not a plain identifier (`a.b.Run()`, `f().Run()`)
    UnsupportedReceiver(&'static str),
    /// Callee shape the resolver does not handle (`fs[0]()`, `mk()()`)
    UnsupportedCallee(&'static str),
}

impl std::fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnresolvedReason::NotACall => f.write_str("go statement without call expression"),
            UnresolvedReason::UnknownFunction(name) => write!(f, "no declaration for `{}`", name),
            UnresolvedReason::FunctionValue(name) => write!(f, "`{}` is a function value", name),
            UnresolvedReason::UnknownReceiverType(name) => {
                write!(f, "static type of `{}` unknown", name)
            }
            UnresolvedReason::NotPointerReceiver(ty) => {
                write!(f, "receiver type `{}` is not a pointer to a named type", ty)
            }
            UnresolvedReason::UnknownMethod { type_name, method } => {
                write!(f, "`*{}` has no method `{}`", type_name, method)
            }
            UnresolvedReason::UnsupportedReceiver(kind) => write!(f, "receiver is a {}", kind),
            UnresolvedReason::UnsupportedCallee(kind) => write!(f, "callee is a {}", kind),
        }
    }
}

/// Outcome for one launch statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchVerdict {
    Safe,
    Unsafe,
}

impl LaunchVerdict {
    pub fn from_safe(safe: bool) -> Self {
        if safe {
            LaunchVerdict::Safe
        } else {
            LaunchVerdict::Unsafe
        }
    }
}
