//! The synthetic filesystem tree
//!
//! This module owns the tree model and everything that walks it:
//!
//! - `node` - arena-backed `FsTree` with `Dir`/`File` nodes
//! - `metadata` - shared metadata records and their memoization cache
//! - `builder` - construction from parsed commands
//! - `iter` - explicit-stack depth-first traversal
//! - `size` - aggregate size of all files
//! - `filter` - ignore-pattern pruning

mod builder;
mod filter;
mod iter;
mod metadata;
mod node;
pub mod size;

// Re-export public types
pub use builder::{BuildError, TreeBuilder};
pub use filter::{glob_match, prune, should_ignore};
pub use iter::DepthFirst;
pub use metadata::{Metadata, MetadataCache};
pub use node::{FsTree, Node, NodeId, NodeKind};
