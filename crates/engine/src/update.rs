//! Reactive text update walk.
//!
//! Walks the paired (host node, abstract node) structure depth-first in
//! document order, matching children positionally by index.
//!
//! Contract:
//! - Text pairs: each resolvable placeholder occurrence overwrites the whole
//!   host text content with the ORIGINAL template string carrying only that
//!   occurrence's replacement. With several resolvable placeholders in one
//!   string, the last one processed determines the final content; unresolved
//!   occurrences leave the previous write untouched.
//! - Element pairs: descend only while the live host child count equals the
//!   abstract node's recorded child count; on divergence that branch freezes
//!   silently and siblings continue.
//! - A text write aimed at a non-text host node degrades to a logged skip.

use crate::state::StateMap;
use crate::template::placeholders;
use host::{HostDocument, NodeId};
use vdom::Node;

pub(crate) fn update_tree(doc: &mut HostDocument, host: NodeId, node: &Node, state: &StateMap) {
    match node {
        Node::Text { content } => update_text(doc, host, content, state),
        Node::Element { children, .. } => {
            let live = doc.child_count(host);
            if live != children.len() {
                log::trace!(
                    target: "engine.update",
                    "frozen subtree at {host:?}: {live} live children vs {} recorded",
                    children.len()
                );
                return;
            }
            let host_children: Vec<NodeId> = doc.children(host).to_vec();
            for (child_id, child) in host_children.into_iter().zip(children) {
                update_tree(doc, child_id, child, state);
            }
        }
    }
}

fn update_text(doc: &mut HostDocument, host: NodeId, content: &str, state: &StateMap) {
    for found in placeholders(content) {
        let Some(value) = state.get(found.key) else {
            continue;
        };
        let patched = content.replacen(found.raw, &value.to_string(), 1);
        if let Err(err) = doc.set_text(host, &patched) {
            log::trace!(target: "engine.update", "text write skipped at {host:?}: {err:?}");
        }
    }
}
