//! Deterministic host-subtree serialization for test comparisons.
//! Not a public stable format.
//!
//! Equivalence rules:
//! - Node kinds must match.
//! - Element tags must match exactly (import normalizes case upstream).
//! - Attribute list order is significant; names and values must match.
//! - Text content must match exactly.
//! - Comments render when `include_comments` is set, otherwise they are
//!   omitted from the lines entirely.

use crate::document::{HostDocument, NodeId};
use std::fmt::Write;

#[derive(Clone, Copy, Debug)]
pub struct SnapshotOptions {
    pub include_comments: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            include_comments: false,
        }
    }
}

pub fn snapshot_lines(doc: &HostDocument, root: NodeId) -> Vec<String> {
    snapshot_lines_with(doc, root, SnapshotOptions::default())
}

pub fn snapshot_lines_with(
    doc: &HostDocument,
    root: NodeId,
    options: SnapshotOptions,
) -> Vec<String> {
    let mut lines = Vec::new();
    walk(doc, root, 0, options, &mut lines);
    lines
}

pub fn render(doc: &HostDocument, root: NodeId) -> String {
    snapshot_lines(doc, root).join("\n")
}

fn walk(
    doc: &HostDocument,
    id: NodeId,
    depth: usize,
    options: SnapshotOptions,
    lines: &mut Vec<String>,
) {
    use crate::document::NodeKind;

    let indent = "  ".repeat(depth);
    match doc.kind(id) {
        Some(NodeKind::Element) => {
            let mut line = String::new();
            let _ = write!(&mut line, "{indent}<{}", doc.tag(id).unwrap_or(""));
            for (name, value) in doc.attributes(id).unwrap_or(&[]) {
                let _ = write!(&mut line, " {name}={value:?}");
            }
            line.push('>');
            lines.push(line);
            for &child in doc.children(id) {
                walk(doc, child, depth + 1, options, lines);
            }
        }
        Some(NodeKind::Text) => {
            lines.push(format!("{indent}{:?}", doc.text(id).unwrap_or("")));
        }
        Some(NodeKind::Comment) => {
            if options.include_comments {
                lines.push(format!("{indent}<!-- {} -->", doc.text(id).unwrap_or("")));
            }
        }
        None => {
            lines.push(format!("{indent}#missing {id:?}"));
        }
    }
}
