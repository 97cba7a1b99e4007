//! Declared static types, as far as the lint needs them

use serde::{Deserialize, Serialize};

use crate::features::parsing::{kinds, SyntaxRef};

/// A named type declared in the current package, possibly behind one `*`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticType {
    pub name: String,
    pub pointer: bool,
}

impl StaticType {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pointer: false,
        }
    }

    pub fn pointer_to(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pointer: true,
        }
    }

    /// `*T` for a value type `T`; `None` for `**T`
    pub fn add_pointer(self) -> Option<Self> {
        if self.pointer {
            None
        } else {
            Some(Self::pointer_to(self.name))
        }
    }

    /// Read a type expression. `pkg.T`, slices, maps, funcs etc. yield `None`.
    pub fn from_type_node(node: SyntaxRef<'_>) -> Option<Self> {
        match node.kind() {
            // `new(T)` arguments parse as expressions
            kinds::TYPE_IDENTIFIER | kinds::IDENTIFIER => Some(Self::named(node.text())),
            kinds::POINTER_TYPE => Self::from_type_node(node.named_child(0)?)?.add_pointer(),
            kinds::GENERIC_TYPE => {
                let base = node.field(kinds::FIELD_TYPE)?;
                (base.kind() == kinds::TYPE_IDENTIFIER).then(|| Self::named(base.text()))
            }
            kinds::PARENTHESIZED_TYPE => Self::from_type_node(node.named_child(0)?),
            _ => None,
        }
    }
}

impl std::fmt::Display for StaticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.pointer {
            write!(f, "*{}", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}
