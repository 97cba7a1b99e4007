//! Lexical identifier lookup
//!
//! Finds the declaration an identifier refers to by walking outward from
//! the use site: preceding statements of each enclosing block (and
//! `if`/`for`/`switch` initializers, `range` clauses, type-switch aliases,
//! `select` receive cases), then parameters of enclosing function literals,
//! stopping at the enclosing top-level declaration. Package-level names
//! are the index's business.

use crate::features::parsing::{kinds, SyntaxRef};
use crate::features::symbol_index::{var_specs, DeclIndex, StaticType};

/// A local declaration of a name
#[derive(Debug, Clone, Copy)]
pub enum LocalBinding<'t> {
    /// `x := ...` or `var x ...`; `position` is the index among its names
    Declared { decl: SyntaxRef<'t>, position: usize },
    /// Parameter, receiver, named result or type-switch alias; `ty` is its
    /// type expression when one is spelled out
    Typed { ty: Option<SyntaxRef<'t>> },
    /// `range` variables and `select` receives: shadows, type unknown
    Untyped,
}

impl<'t> LocalBinding<'t> {
    pub fn static_type(&self, index: &DeclIndex<'t>) -> Option<StaticType> {
        match *self {
            LocalBinding::Declared { decl, position } => index.binding_type(decl, position),
            LocalBinding::Typed { ty } => StaticType::from_type_node(ty?),
            LocalBinding::Untyped => None,
        }
    }
}

/// Innermost local declaration of `ident` visible at its position
pub fn find_local_binding<'t>(ident: SyntaxRef<'t>) -> Option<LocalBinding<'t>> {
    let name = ident.text();
    let mut on_path = ident;
    let mut scope = ident.parent();

    while let Some(node) = scope {
        match node.kind() {
            kinds::FUNC_LITERAL => {
                if let Some(binding) = parameter_binding(node, name) {
                    return Some(binding);
                }
            }
            kinds::FUNCTION_DECLARATION | kinds::METHOD_DECLARATION => {
                return parameter_binding(node, name);
            }
            kinds::TYPE_SWITCH_STATEMENT => {
                if let Some(binding) = type_switch_alias(node, on_path, name)
                    .or_else(|| preceding_declaration(node, on_path, name))
                {
                    return Some(binding);
                }
            }
            _ => {
                if let Some(binding) = preceding_declaration(node, on_path, name) {
                    return Some(binding);
                }
            }
        }
        on_path = node;
        scope = node.parent();
    }
    None
}

/// Last declaration of `name` among the children of `node` before `on_path`
fn preceding_declaration<'t>(
    node: SyntaxRef<'t>,
    on_path: SyntaxRef<'t>,
    name: &str,
) -> Option<LocalBinding<'t>> {
    let mut found = None;
    for child in node.named_children() {
        if child.node.start_byte() >= on_path.node.start_byte() {
            break;
        }
        if let Some(binding) = declaration_of(child, name) {
            found = Some(binding);
        }
    }
    found
}

fn declaration_of<'t>(stmt: SyntaxRef<'t>, name: &str) -> Option<LocalBinding<'t>> {
    match stmt.kind() {
        kinds::SHORT_VAR_DECLARATION => {
            let position = left_position(stmt, name)?;
            Some(LocalBinding::Declared {
                decl: stmt,
                position,
            })
        }
        kinds::VAR_DECLARATION => {
            let mut found = None;
            for spec in var_specs(stmt) {
                if let Some(position) = spec
                    .fields(kinds::FIELD_NAME)
                    .iter()
                    .position(|n| n.text() == name)
                {
                    found = Some(LocalBinding::Declared {
                        decl: spec,
                        position,
                    });
                }
            }
            found
        }
        // for x := ...; cond; post { ... }
        kinds::FOR_CLAUSE => declaration_of(stmt.field(kinds::FIELD_INITIALIZER)?, name),
        // for k, v := range xs { ... }
        kinds::RANGE_CLAUSE if defines(stmt) => {
            left_position(stmt, name).map(|_| LocalBinding::Untyped)
        }
        // case v := <-ch:
        kinds::RECEIVE_STATEMENT if defines(stmt) => {
            left_position(stmt, name).map(|_| LocalBinding::Untyped)
        }
        _ => None,
    }
}

/// Index of `name` in the `left` expression list of `stmt`
fn left_position(stmt: SyntaxRef<'_>, name: &str) -> Option<usize> {
    stmt.field(kinds::FIELD_LEFT)?
        .named_children()
        .iter()
        .position(|target| target.kind() == kinds::IDENTIFIER && target.text() == name)
}

/// `:=` rather than `=`
fn defines(stmt: SyntaxRef<'_>) -> bool {
    let mut cursor = stmt.node.walk();
    let found = stmt.node.children(&mut cursor).any(|child| child.kind() == kinds::DEFINE);
    found
}

/// `switch name := x.(type)`: inside a case the alias has the case's type
/// when the case names exactly one
fn type_switch_alias<'t>(
    switch: SyntaxRef<'t>,
    on_path: SyntaxRef<'t>,
    name: &str,
) -> Option<LocalBinding<'t>> {
    if on_path.kind() != kinds::TYPE_CASE && on_path.kind() != kinds::DEFAULT_CASE {
        return None;
    }
    let alias = switch.field(kinds::FIELD_ALIAS)?;
    if !alias.named_children().iter().any(|n| n.text() == name) {
        return None;
    }
    let ty = match on_path.fields(kinds::FIELD_TYPE).as_slice() {
        [only] => Some(*only),
        _ => None,
    };
    Some(LocalBinding::Typed { ty })
}

fn parameter_binding<'t>(func: SyntaxRef<'t>, name: &str) -> Option<LocalBinding<'t>> {
    let lists = [
        kinds::FIELD_RECEIVER,
        kinds::FIELD_PARAMETERS,
        kinds::FIELD_RESULT,
    ];
    for list in lists.iter().filter_map(|field| func.field(field)) {
        if list.kind() != kinds::PARAMETER_LIST {
            continue;
        }
        for param in list.named_children() {
            if param.kind() != kinds::PARAMETER_DECLARATION
                && param.kind() != kinds::VARIADIC_PARAMETER_DECLARATION
            {
                continue;
            }
            if param.fields(kinds::FIELD_NAME).iter().any(|n| n.text() == name) {
                // `xs ...T` is a slice, never a pointer receiver
                let ty = if param.kind() == kinds::PARAMETER_DECLARATION {
                    param.field(kinds::FIELD_TYPE)
                } else {
                    None
                };
                return Some(LocalBinding::Typed { ty });
            }
        }
    }
    None
}
