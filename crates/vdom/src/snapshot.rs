//! Deterministic abstract-tree serialization for test comparisons.
//! Same line shape as the host snapshot so imported trees can be compared
//! against live subtrees directly.

use crate::Node;
use std::fmt::Write;

pub fn snapshot_lines(root: &Node) -> Vec<String> {
    let mut lines = Vec::new();
    walk(root, 0, &mut lines);
    lines
}

pub fn render(root: &Node) -> String {
    snapshot_lines(root).join("\n")
}

fn walk(node: &Node, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Element {
            tag,
            attributes,
            children,
        } => {
            let mut line = String::new();
            let _ = write!(&mut line, "{indent}<{tag}");
            for (name, value) in attributes {
                let _ = write!(&mut line, " {name}={value:?}");
            }
            line.push('>');
            lines.push(line);
            for child in children {
                walk(child, depth + 1, lines);
            }
        }
        Node::Text { content } => {
            lines.push(format!("{indent}{content:?}"));
        }
    }
}
