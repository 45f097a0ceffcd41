//! Ignore-pattern pruning
//!
//! `-I/--ignore` patterns remove whole subtrees before aggregation and
//! rendering. Directories match on their name, files on their full
//! `name.extension` display form. The source tree is untouched: pruning
//! copies the survivors into a fresh arena, sharing metadata records.

use std::rc::Rc;

use glob::Pattern;

use super::node::{FsTree, NodeId, NodeKind};

/// Copy `tree` minus every node (and subtree) whose display name matches one
/// of `patterns`. The root is never pruned.
pub fn prune(tree: &FsTree, patterns: &[String]) -> FsTree {
    let mut pruned = FsTree::new();
    let pruned_root = pruned.root();
    copy_children(tree, tree.root(), &mut pruned, pruned_root, patterns);
    pruned
}

fn copy_children(
    src: &FsTree,
    src_id: NodeId,
    dst: &mut FsTree,
    dst_id: NodeId,
    patterns: &[String],
) {
    let NodeKind::Dir { children } = &src.node(src_id).kind else {
        return;
    };
    for &child in children {
        let node = src.node(child);
        match &node.kind {
            NodeKind::Dir { .. } => {
                if should_ignore(&node.name, patterns) {
                    continue;
                }
                let copy = dst.add_directory(dst_id, node.name.clone());
                copy_children(src, child, dst, copy, patterns);
            }
            NodeKind::File { size_kb, metadata } => {
                let display = format!("{}.{}", node.name, metadata.extension);
                if should_ignore(&display, patterns) {
                    continue;
                }
                dst.add_file(dst_id, node.name.clone(), *size_kb, Rc::clone(metadata));
            }
        }
    }
}

/// A name is ignored on exact equality or a glob match.
pub fn should_ignore(name: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name. Invalid patterns match nothing.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
