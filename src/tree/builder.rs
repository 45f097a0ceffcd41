//! Construction of an `FsTree` from parsed commands
//!
//! The builder owns the metadata cache and the table mapping declared
//! directory identifiers to arena ids. Commands must arrive in dependency
//! order: a parent directory exists before anything attaches to it. Once
//! `finish` returns, the tree is frozen.

use std::collections::HashMap;

use thiserror::Error;

use crate::commands::Command;

use super::metadata::MetadataCache;
use super::node::{FsTree, NodeId};

#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("parent directory {0} does not exist")]
    UnresolvedParent(u64),
    #[error("directory identifier {0} is already in use")]
    DuplicateIdentifier(u64),
}

/// Applies commands one at a time, validating what the node model does not.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: FsTree,
    cache: MetadataCache,
    /// Declared directory id -> arena id. Seeded with the root as 0.
    directories: HashMap<u64, NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        let tree = FsTree::new();
        let mut directories = HashMap::new();
        directories.insert(0, tree.root());
        Self {
            tree,
            cache: MetadataCache::new(),
            directories,
        }
    }

    /// Build a tree from a full command sequence.
    pub fn build(commands: impl IntoIterator<Item = Command>) -> Result<FsTree, BuildError> {
        let mut builder = Self::new();
        for command in commands {
            builder.apply(command)?;
        }
        Ok(builder.finish())
    }

    pub fn apply(&mut self, command: Command) -> Result<(), BuildError> {
        match command {
            Command::Dir { id, parent, name } => {
                if self.directories.contains_key(&id) {
                    return Err(BuildError::DuplicateIdentifier(id));
                }
                let parent = self.resolve(parent)?;
                let node = self.tree.add_directory(parent, name);
                self.directories.insert(id, node);
            }
            Command::File {
                parent,
                permissions,
                owner,
                group,
                size_kb,
                name,
                extension,
            } => {
                let parent = self.resolve(parent)?;
                let metadata = self
                    .cache
                    .get_or_create(&permissions, &owner, &group, &extension);
                self.tree.add_file(parent, name, size_kb, metadata);
            }
        }
        Ok(())
    }

    fn resolve(&self, declared: u64) -> Result<NodeId, BuildError> {
        self.directories
            .get(&declared)
            .copied()
            .ok_or(BuildError::UnresolvedParent(declared))
    }

    /// Hand over the completed tree. Nothing mutates it after this.
    pub fn finish(self) -> FsTree {
        self.tree
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
