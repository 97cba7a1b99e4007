//! Node handles that remember which file they came from

use std::path::Path;

use tree_sitter::Node as TSNode;

use super::source_unit::SourceUnit;
use crate::shared::models::Span;

/// Conversion from tree-sitter positions to `Span`
pub trait SpanExt {
    fn to_span(&self) -> Span;
}

impl SpanExt for TSNode<'_> {
    fn to_span(&self) -> Span {
        Span::new(
            self.start_position().row as u32 + 1,
            self.start_position().column as u32,
            self.end_position().row as u32 + 1,
            self.end_position().column as u32,
        )
    }
}

/// A syntax node together with its owning source unit
///
/// Declarations found through the package index can live in another file
/// than the launch being judged, so the analysis never passes a bare node.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxRef<'t> {
    pub unit: &'t SourceUnit,
    pub node: TSNode<'t>,
}

impl<'t> SyntaxRef<'t> {
    pub fn new(unit: &'t SourceUnit, node: TSNode<'t>) -> Self {
        Self { unit, node }
    }

    /// Same file, different node
    pub fn with_node(&self, node: TSNode<'t>) -> Self {
        Self {
            unit: self.unit,
            node,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    pub fn text(&self) -> &'t str {
        self.unit.text(&self.node)
    }

    pub fn span(&self) -> Span {
        self.node.to_span()
    }

    pub fn path(&self) -> &'t Path {
        &self.unit.path
    }

    pub fn field(&self, name: &str) -> Option<SyntaxRef<'t>> {
        self.node
            .child_by_field_name(name)
            .map(|node| self.with_node(node))
    }

    pub fn named_child(&self, index: usize) -> Option<SyntaxRef<'t>> {
        self.node.named_child(index).map(|node| self.with_node(node))
    }

    /// Named children without comments
    pub fn named_children(&self) -> Vec<SyntaxRef<'t>> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .filter(|node| !node.is_extra())
            .map(|node| self.with_node(node))
            .collect()
    }

    /// All children bound to a (repeatable) field, e.g. the names of a `var_spec`
    pub fn fields(&self, name: &str) -> Vec<SyntaxRef<'t>> {
        let mut cursor = self.node.walk();
        self.node
            .children_by_field_name(name, &mut cursor)
            .map(|node| self.with_node(node))
            .collect()
    }

    pub fn parent(&self) -> Option<SyntaxRef<'t>> {
        self.node.parent().map(|node| self.with_node(node))
    }
}
