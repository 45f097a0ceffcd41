//! Aggregate size of all files in a tree

use super::node::{FsTree, NodeId, NodeKind};

/// Sum of every file's size in kilobytes, over the whole tree.
pub fn total_kb(tree: &FsTree) -> f64 {
    subtree_kb(tree, tree.root())
}

/// Sum of file sizes under `id`, inclusive. Directories contribute nothing
/// of their own.
pub fn subtree_kb(tree: &FsTree, id: NodeId) -> f64 {
    match &tree.node(id).kind {
        NodeKind::File { size_kb, .. } => *size_kb,
        NodeKind::Dir { children } => children.iter().map(|&c| subtree_kb(tree, c)).sum(),
    }
}
