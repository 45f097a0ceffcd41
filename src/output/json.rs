//! JSON output formatting

use std::io;

use serde::Serialize;

use crate::tree::size::total_kb;
use crate::tree::{FsTree, NodeId, NodeKind};

/// Serializable node for `--json` output.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonNode {
    File {
        name: String,
        extension: String,
        size_kb: f64,
        permissions: String,
        owner: String,
        group: String,
    },
    Dir {
        name: String,
        children: Vec<JsonNode>,
    },
}

/// The whole report: aggregate size plus the tree.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub total_kb: f64,
    pub tree: JsonNode,
}

impl JsonReport {
    pub fn from_tree(tree: &FsTree) -> Self {
        Self {
            total_kb: total_kb(tree),
            tree: json_node(tree, tree.root()),
        }
    }
}

fn json_node(tree: &FsTree, id: NodeId) -> JsonNode {
    let node = tree.node(id);
    match &node.kind {
        NodeKind::Dir { children } => JsonNode::Dir {
            name: node.name.clone(),
            children: children.iter().map(|&c| json_node(tree, c)).collect(),
        },
        NodeKind::File { size_kb, metadata } => JsonNode::File {
            name: node.name.clone(),
            extension: metadata.extension.clone(),
            size_kb: *size_kb,
            permissions: metadata.permissions.clone(),
            owner: metadata.owner.clone(),
            group: metadata.group.clone(),
        },
    }
}

/// Print the report as pretty-printed JSON to stdout.
pub fn print_json(report: &JsonReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
