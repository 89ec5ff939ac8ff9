//! Work-list traversal over Tree-sitter nodes.
//!
//! Nodes are visited in preorder from an explicit stack, so deeply nested
//! sources cannot overflow the call stack and visitors can prune subtrees.

use tree_sitter::Node;

/// What to do after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Visit this node's children.
    Descend,
    /// Do not visit this node's children.
    Skip,
}

/// Visits `root` and its descendants in preorder.
///
/// Both named and anonymous nodes are visited.
pub fn walk<'tree>(root: Node<'tree>, mut visit: impl FnMut(Node<'tree>) -> Walk) {
    let mut pending = vec![root];

    while let Some(node) = pending.pop() {
        if visit(node) == Walk::Skip {
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'tree>> = node.children(&mut cursor).collect();
        pending.extend(children.into_iter().rev());
    }
}
