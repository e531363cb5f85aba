//! Host subtree import.
//!
//! Rebuilds an abstract tree from a live host subtree and recovers event
//! bindings from declarative attributes. Listener attachment happens here,
//! exactly once per import; updates never re-resolve bindings.
//!
//! Policy:
//! - Text nodes import verbatim, empty content included.
//! - Comments (and any future non-element, non-text kind) import as the empty
//!   text sentinel and are dropped from the parent's child list. Truly empty
//!   host text nodes collapse the same way; the collapse is observable
//!   behavior, not an accident to paper over.
//! - Tags are normalized to ASCII lowercase; attributes are copied verbatim.
//! - An attribute value that names no registered handler is skipped silently.

use crate::handlers::{HandlerRegistry, host_event_for};
use host::{HostDocument, NodeId, NodeKind};
use vdom::Node;

pub fn import(doc: &mut HostDocument, node: NodeId, registry: &HandlerRegistry) -> Node {
    match doc.kind(node) {
        Some(NodeKind::Text) => Node::text(doc.text(node).unwrap_or_default()),
        Some(NodeKind::Element) => import_element(doc, node, registry),
        Some(NodeKind::Comment) | None => Node::text(""),
    }
}

fn import_element(doc: &mut HostDocument, node: NodeId, registry: &HandlerRegistry) -> Node {
    let tag = doc
        .tag(node)
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let attributes: Vec<(String, String)> = doc
        .attributes(node)
        .map(<[(String, String)]>::to_vec)
        .unwrap_or_default();

    let child_ids: Vec<NodeId> = doc.children(node).to_vec();
    let mut children = Vec::with_capacity(child_ids.len());
    for child in child_ids {
        let imported = import(doc, child, registry);
        if !imported.is_empty_text() {
            children.push(imported);
        }
    }

    bind_handlers(doc, node, &attributes, registry);

    Node::Element {
        tag,
        attributes,
        children,
    }
}

fn bind_handlers(
    doc: &mut HostDocument,
    node: NodeId,
    attributes: &[(String, String)],
    registry: &HandlerRegistry,
) {
    for (key, value) in attributes {
        let Some(kind) = host_event_for(key) else {
            continue;
        };
        match registry.resolve(value) {
            Some(handler) => {
                if let Err(err) = doc.add_event_listener(node, kind, handler) {
                    log::debug!(target: "engine.import", "listener attach failed: {err:?}");
                } else {
                    log::trace!(target: "engine.import", "bound {value:?} to {kind:?} on {node:?}");
                }
            }
            None => {
                log::trace!(target: "engine.import", "no handler named {value:?} for {key}");
            }
        }
    }
}
