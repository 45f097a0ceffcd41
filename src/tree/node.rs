//! Arena-backed tree model for the synthetic filesystem
//!
//! Nodes live in a flat vector owned by `FsTree` and refer to each other by
//! `NodeId`. Children are held as ordered id sequences on their directory;
//! the parent link is an id back-reference, so upward walks go through the
//! arena rather than through owning pointers.

use std::rc::Rc;

use super::iter::DepthFirst;
use super::metadata::Metadata;

/// Index of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A single entry in the tree: a directory or a file.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    /// Back-reference to the parent's id. `None` only for the root.
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

/// The two node variants. Aggregation and rendering branch on this with a
/// `match`; there is no downcasting anywhere.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Dir {
        /// Child ids in insertion order. Never re-sorted.
        children: Vec<NodeId>,
    },
    File {
        /// Size in kilobytes, possibly fractional.
        size_kb: f64,
        /// Shared record owned by the metadata cache.
        metadata: Rc<Metadata>,
    },
}

impl Node {
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Dir { .. })
    }
}

/// The tree itself. Construct once, then treat as frozen: both the size
/// aggregation and the rendering walks are read-only.
#[derive(Debug, Clone)]
pub struct FsTree {
    nodes: Vec<Node>,
}

impl FsTree {
    /// Create a tree holding only the root directory, named ".".
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: ".".to_string(),
                parent: None,
                kind: NodeKind::Dir {
                    children: Vec::new(),
                },
            }],
        }
    }

    /// The unique traversal start.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        false // the root always exists
    }

    /// Append a directory under `parent` and return its id.
    ///
    /// The model performs no validation; callers are expected to pass the id
    /// of an existing directory (the builder checks this).
    pub fn add_directory(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            parent: Some(parent),
            kind: NodeKind::Dir {
                children: Vec::new(),
            },
        });
        self.attach(parent, id);
        id
    }

    /// Append a file under `parent` and return its id.
    pub fn add_file(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        size_kb: f64,
        metadata: Rc<Metadata>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            parent: Some(parent),
            kind: NodeKind::File { size_kb, metadata },
        });
        self.attach(parent, id);
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let NodeKind::Dir { children } = &mut self.nodes[parent.0].kind {
            children.push(child);
        }
    }

    /// Whether `id` sits at the final position of its parent's child
    /// sequence.
    ///
    /// Returns false for the root (no parent), when the parent is not a
    /// directory (unreachable for a well-formed tree, kept as a no-op), and
    /// when the node is absent from the parent's children.
    pub fn is_last_child(&self, id: NodeId) -> bool {
        let Some(parent) = self.node(id).parent else {
            return false;
        };
        let NodeKind::Dir { children } = &self.node(parent).kind else {
            return false;
        };
        match children.iter().position(|&c| c == id) {
            Some(index) => index == children.len() - 1,
            None => false,
        }
    }

    /// Depth-first pre-order traversal over node ids, children in insertion
    /// order.
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst::new(self)
    }
}

impl Default for FsTree {
    fn default() -> Self {
        Self::new()
    }
}
