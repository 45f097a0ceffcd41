//! Box-drawing tree renderer
//!
//! Produces one line per node in depth-first pre-order. The interesting part
//! is the indentation: a node's prefix encodes, for every ancestor above its
//! immediate parent's level, whether that ancestor was the last child of its
//! own parent. A closed branch gets blank space beneath it; an open one gets
//! a vertical continuation bar. That status is not stored on the nodes, so
//! it is reconstructed per line by walking ancestor ids up to the root.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::size::total_kb;
use crate::tree::{FsTree, NodeId, NodeKind};

use super::config::OutputConfig;
use super::utils::{format_kb, summary_line};

const TEE: &str = "├── ";
const ELBOW: &str = "└── ";
const BAR: &str = "│   ";
const BLANK: &str = "    ";

/// Formatter for the text report: summary line, then the listing.
pub struct TreeRenderer {
    config: OutputConfig,
}

impl TreeRenderer {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the whole report to a string.
    pub fn format(&self, tree: &FsTree) -> String {
        let mut output = String::new();
        if self.config.show_total {
            output.push_str(&summary_line(total_kb(tree)));
            output.push('\n');
        }
        for id in tree.depth_first() {
            output.push_str(&self.line(tree, id));
            output.push('\n');
        }
        output
    }

    /// The listing only, one rendered line per node, root first.
    pub fn lines(&self, tree: &FsTree) -> Vec<String> {
        tree.depth_first().map(|id| self.line(tree, id)).collect()
    }

    /// Print the report to stdout, coloring directory and file names when
    /// color is enabled. Structural glyphs and sizes stay plain.
    pub fn print(&self, tree: &FsTree) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        if self.config.show_total {
            writeln!(stdout, "{}", summary_line(total_kb(tree)))?;
        }
        for id in tree.depth_first() {
            self.print_line(tree, id, &mut stdout)?;
        }
        Ok(())
    }

    fn line(&self, tree: &FsTree, id: NodeId) -> String {
        // The root is a literal marker with no prefix or connector.
        if id == tree.root() {
            return ".".to_string();
        }
        let node = tree.node(id);
        let prefix = self.ancestor_prefix(tree, id);
        let connector = if tree.is_last_child(id) { ELBOW } else { TEE };
        match &node.kind {
            NodeKind::Dir { .. } => format!("{prefix}{connector}{}", node.name),
            NodeKind::File { size_kb, metadata } => format!(
                "{prefix}{connector}{}.{} ({}KB)",
                node.name,
                metadata.extension,
                format_kb(*size_kb)
            ),
        }
    }

    fn print_line(
        &self,
        tree: &FsTree,
        id: NodeId,
        stdout: &mut StandardStream,
    ) -> io::Result<()> {
        if id == tree.root() {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            writeln!(stdout, ".")?;
            stdout.reset()?;
            return Ok(());
        }
        let node = tree.node(id);
        let prefix = self.ancestor_prefix(tree, id);
        let connector = if tree.is_last_child(id) { ELBOW } else { TEE };
        write!(stdout, "{prefix}{connector}")?;
        match &node.kind {
            NodeKind::Dir { .. } => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                writeln!(stdout, "{}", node.name)?;
                stdout.reset()?;
            }
            NodeKind::File { size_kb, metadata } => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
                write!(stdout, "{}.{}", node.name, metadata.extension)?;
                stdout.reset()?;
                writeln!(stdout, " ({}KB)", format_kb(*size_kb))?;
            }
        }
        Ok(())
    }

    /// Indentation ahead of the connector.
    ///
    /// Walk upward from the node's parent to (but excluding) the root. Each
    /// ancestor that was itself a last child contributes blank space: its
    /// branch is closed, nothing continues below it. Each ancestor with
    /// siblings still to come contributes a continuation bar. The walk
    /// collects nearest-ancestor-first, so the segments are reversed to
    /// print the furthest ancestor's column first.
    fn ancestor_prefix(&self, tree: &FsTree, id: NodeId) -> String {
        let mut segments: Vec<&str> = Vec::new();
        let mut cursor = tree.node(id).parent;
        while let Some(ancestor) = cursor {
            if ancestor == tree.root() {
                break;
            }
            segments.push(if tree.is_last_child(ancestor) {
                BLANK
            } else {
                BAR
            });
            cursor = tree.node(ancestor).parent;
        }
        segments.into_iter().rev().collect()
    }
}
