//! Shared helpers for fixture-driven tree tests.
//!
//! Fixtures describe host pages as JSON; tests build them into a
//! `HostDocument` and compare subtrees by snapshot lines.

use host::{HostDocument, NodeId};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FixtureNode {
    Element {
        tag: String,
        #[serde(default)]
        attributes: Vec<(String, String)>,
        #[serde(default)]
        children: Vec<FixtureNode>,
    },
    Text {
        content: String,
    },
    Comment {
        content: String,
    },
}

pub fn load_fixture(json: &str) -> FixtureNode {
    serde_json::from_str(json).expect("fixture JSON must parse")
}

/// Build the fixture as a detached host subtree and return its root id.
pub fn build_subtree(doc: &mut HostDocument, fixture: &FixtureNode) -> NodeId {
    match fixture {
        FixtureNode::Element {
            tag,
            attributes,
            children,
        } => {
            let id = doc.create_element(tag.as_str());
            for (name, value) in attributes {
                doc.set_attribute(id, name, value)
                    .expect("fixture attribute on fresh element");
            }
            for child in children {
                let built = build_subtree(doc, child);
                doc.append_child(id, built)
                    .expect("fixture child append on fresh element");
            }
            id
        }
        FixtureNode::Text { content } => doc.create_text(content.as_str()),
        FixtureNode::Comment { content } => doc.create_comment(content.as_str()),
    }
}

/// Assert two host subtrees render to identical snapshot lines, with a
/// line-diff style panic message on mismatch.
pub fn assert_same_shape(doc: &HostDocument, expected: NodeId, actual: NodeId) {
    let expected_lines = host::snapshot::snapshot_lines(doc, expected);
    let actual_lines = host::snapshot::snapshot_lines(doc, actual);
    if expected_lines != actual_lines {
        panic!(
            "host subtrees differ\n--- expected ({expected:?})\n{}\n--- actual ({actual:?})\n{}",
            expected_lines.join("\n"),
            actual_lines.join("\n"),
        );
    }
}

/// Assert an abstract tree matches a host subtree line-for-line.
pub fn assert_tree_matches_host(doc: &HostDocument, host_root: NodeId, tree: &vdom::Node) {
    let host_lines = host::snapshot::snapshot_lines(doc, host_root);
    let tree_lines = vdom::snapshot::snapshot_lines(tree);
    if host_lines != tree_lines {
        panic!(
            "abstract tree does not match host subtree\n--- host ({host_root:?})\n{}\n--- tree\n{}",
            host_lines.join("\n"),
            tree_lines.join("\n"),
        );
    }
}
