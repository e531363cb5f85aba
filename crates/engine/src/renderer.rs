//! Abstract-tree materialization.
//!
//! Creates one host node per abstract node and appends the finished subtree
//! under the given parent. Attributes are set in the abstract node's own
//! iteration order, so the produced attribute lists are deterministic. Text
//! content is written verbatim; placeholder substitution belongs to the
//! update walk alone.

use host::{HostDocument, HostError, NodeId};
use vdom::Node;

/// Materialize `node` as a fresh host subtree under `parent` and return the
/// created root's id (the engine pairs it with the abstract tree).
pub fn render_into(
    doc: &mut HostDocument,
    node: &Node,
    parent: NodeId,
) -> Result<NodeId, HostError> {
    let root = build(doc, node)?;
    doc.append_child(parent, root)?;
    Ok(root)
}

fn build(doc: &mut HostDocument, node: &Node) -> Result<NodeId, HostError> {
    match node {
        Node::Text { content } => Ok(doc.create_text(content.as_str())),
        Node::Element {
            tag,
            attributes,
            children,
        } => {
            let id = doc.create_element(tag.as_str());
            for (name, value) in attributes {
                doc.set_attribute(id, name, value)?;
            }
            for child in children {
                let built = build(doc, child)?;
                doc.append_child(id, built)?;
            }
            Ok(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use host::snapshot;
    use vdom::{attr, create_element};

    #[test]
    fn renders_structure_and_leaves_placeholders_untouched() {
        let mut doc = HostDocument::new();
        let mount = doc.create_element("body");

        let tree = create_element(
            "div",
            vec![attr("id", "app")],
            vec![create_element(
                "span",
                vec![],
                vec![Node::text("{{counter}}")],
            )],
        );
        let root = render_into(&mut doc, &tree, mount).unwrap();

        assert_eq!(doc.children(mount), &[root]);
        assert_eq!(
            snapshot::snapshot_lines(&doc, root),
            vec![
                "<div id=\"app\">".to_string(),
                "  <span>".to_string(),
                "    \"{{counter}}\"".to_string(),
            ]
        );
    }

    #[test]
    fn text_roots_render_as_bare_text_nodes() {
        let mut doc = HostDocument::new();
        let mount = doc.create_element("body");
        let root = render_into(&mut doc, &Node::text("plain"), mount).unwrap();
        assert_eq!(doc.text(root), Some("plain"));
    }
}
