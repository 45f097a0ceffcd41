//! Explicit-stack depth-first traversal
//!
//! The renderer walks the tree through this iterator rather than through the
//! call stack, so traversal depth is bounded by heap, not stack. Ordering is
//! the defining property: pre-order, with a directory's children visited in
//! their original insertion order, each subtree fully emitted before the
//! next sibling starts.

use super::node::{FsTree, NodeId, NodeKind};

/// Depth-first pre-order iterator over node ids, root first.
///
/// Each `next()` pops the top of the stack, pushes the popped node's
/// children in reverse insertion order, and yields the popped id. The
/// reverse push is what makes the LIFO stack reproduce forward insertion
/// order on the way out.
pub struct DepthFirst<'a> {
    tree: &'a FsTree,
    stack: Vec<NodeId>,
}

impl<'a> DepthFirst<'a> {
    pub(crate) fn new(tree: &'a FsTree) -> Self {
        Self {
            tree,
            stack: vec![tree.root()],
        }
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let NodeKind::Dir { children } = &self.tree.node(id).kind {
            self.stack.extend(children.iter().rev());
        }
        Some(id)
    }
}
