//! Indented pre-order text rendering.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::node::NodeId;
use crate::domain::tree::GenericTree;

/// Widest accepted indent step.
pub const MAX_INDENT_WIDTH: usize = 64;

/// How a tree is rendered as indented text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PrintOptions {
    /// Spaces per depth level, at most [`MAX_INDENT_WIDTH`]
    pub indent_width: usize,
    /// Text emitted for an absent node
    pub empty_marker: String,
    /// Render vacant slots of fixed-arity nodes that have children
    pub show_vacant: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent_width: 3,
            empty_marker: "null".into(),
            show_vacant: true,
        }
    }
}

impl<T: fmt::Display> GenericTree<T> {
    /// Writes the tree to stdout with default options.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &PrintOptions::default())
    }

    /// Writes one line per node, indented by depth; an empty tree writes the
    /// empty marker.
    ///
    /// The indent width is clamped to [`MAX_INDENT_WIDTH`].
    #[instrument(level = "trace", skip_all)]
    pub fn write_to<W: Write>(&self, out: &mut W, options: &PrintOptions) -> io::Result<()> {
        let step = options.indent_width.min(MAX_INDENT_WIDTH);
        let mut stack: Vec<(Option<NodeId>, usize)> = vec![(self.root(), 0)];
        while let Some((id, level)) = stack.pop() {
            let width = level.saturating_mul(step);
            let Some(node) = id.and_then(|id| self.node(id)) else {
                writeln!(out, "{:width$}{}", "", options.empty_marker)?;
                continue;
            };
            writeln!(out, "{:width$}{}", "", node.data())?;
            if node.is_leaf() {
                continue;
            }
            let next: Vec<Option<NodeId>> = if options.show_vacant {
                node.children.slots().collect()
            } else {
                node.children().map(|(_, child)| Some(child)).collect()
            };
            stack.extend(next.into_iter().rev().map(|slot| (slot, level + 1)));
        }
        Ok(())
    }

    /// Renders into a `String`.
    pub fn render(&self, options: &PrintOptions) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_to(&mut buf, options);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<T: fmt::Display> fmt::Display for GenericTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&PrintOptions::default()))
    }
}
