//! Arbor - renders a filesystem tree described by a command script

pub mod commands;
pub mod output;
pub mod tree;

pub use commands::{Command, ParseError, parse_script};
pub use output::{JsonReport, OutputConfig, TreeRenderer, format_kb, print_json, summary_line};
pub use tree::{BuildError, FsTree, Metadata, MetadataCache, NodeKind, TreeBuilder, prune};
