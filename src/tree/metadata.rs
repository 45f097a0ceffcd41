//! Shared file metadata and its memoization cache
//!
//! Many files in a script repeat the same (permissions, owner, group,
//! extension) tuple. The cache hands out one shared `Rc<Metadata>` per
//! distinct tuple so identical metadata is a single allocation referenced
//! from every file that carries it.

use std::collections::HashMap;
use std::rc::Rc;

/// Immutable per-file metadata. Created once by the cache, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub permissions: String,
    pub owner: String,
    pub group: String,
    pub extension: String,
}

/// Memoization table keyed by the 4-tuple of metadata fields.
///
/// Lookup is exact, case-sensitive string equality on all four fields. There
/// is no eviction: the cache lives as long as the builder that owns it.
#[derive(Debug, Default)]
pub struct MetadataCache {
    entries: HashMap<(String, String, String, String), Rc<Metadata>>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared record for this tuple, creating it on first sight.
    pub fn get_or_create(
        &mut self,
        permissions: &str,
        owner: &str,
        group: &str,
        extension: &str,
    ) -> Rc<Metadata> {
        let key = (
            permissions.to_string(),
            owner.to_string(),
            group.to_string(),
            extension.to_string(),
        );
        Rc::clone(self.entries.entry(key).or_insert_with(|| {
            Rc::new(Metadata {
                permissions: permissions.to_string(),
                owner: owner.to_string(),
                group: group.to_string(),
                extension: extension.to_string(),
            })
        }))
    }

    /// Number of distinct tuples seen so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
