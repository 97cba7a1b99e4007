//! Syntax inspector
//!
//! Pre-order depth-first walk over the named nodes of a subtree. The
//! callback decides per node whether to enter its children, skip them, or
//! end the whole walk.

use tree_sitter::Node as TSNode;

/// What the inspector does after visiting a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Visit the node's children next
    Descend,
    /// Do not enter this node's children
    Skip,
    /// End the traversal
    Stop,
}

/// Walk `root` and its named descendants in source order.
///
/// Returns `true` if the callback stopped the walk early.
pub fn inspect<'t, F>(root: TSNode<'t>, mut visit: F) -> bool
where
    F: FnMut(TSNode<'t>) -> Visit,
{
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        // Anonymous nodes are tokens: never visited, never have named children
        let descend = if node.is_named() {
            match visit(node) {
                Visit::Stop => return true,
                Visit::Descend => true,
                Visit::Skip => false,
            }
        } else {
            false
        };

        if descend && cursor.goto_first_child() {
            continue;
        }

        // goto_parent fails once the cursor is back at `root`
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return false;
            }
        }
    }
}
