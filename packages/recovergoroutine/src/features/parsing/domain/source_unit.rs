//! One parsed Go file

use std::path::{Path, PathBuf};

use tree_sitter::{Node as TSNode, Tree};

use super::kinds;

/// Parsed Go source file
///
/// Owns both the text and the tree so that every `TSNode` handed out by
/// `root()` can be turned back into text with `text()`.
#[derive(Debug)]
pub struct SourceUnit {
    /// File path (for diagnostics and error messages)
    pub path: PathBuf,

    /// Source code
    pub source: String,

    /// Name from the `package` clause (empty if the clause is absent)
    pub package: String,

    tree: Tree,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, source: String, tree: Tree) -> Self {
        let package = package_name(&tree, &source).unwrap_or_default();
        Self {
            path: path.into(),
            source,
            package,
            tree,
        }
    }

    pub fn root(&self) -> TSNode<'_> {
        self.tree.root_node()
    }

    /// Get node text from tree-sitter node
    pub fn text(&self, node: &TSNode) -> &str {
        self.source.get(node.byte_range()).unwrap_or("")
    }

    /// Directory that defines package membership
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// `_test.go` files belong to the package's test build
pub fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with("_test.go"))
        .unwrap_or(false)
}

fn package_name(tree: &Tree, source: &str) -> Option<String> {
    let root = tree.root_node();
    let mut cursor = root.walk();
    let clause = root
        .named_children(&mut cursor)
        .find(|child| child.kind() == kinds::PACKAGE_CLAUSE)?;
    let name = clause.named_child(0)?;
    source.get(name.byte_range()).map(str::to_string)
}
