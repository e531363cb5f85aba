//! Abstract UI tree.
//!
//! The engine's own in-memory representation, independent of the live host
//! document. A closed two-variant shape: elements carry a tag, an ordered
//! attribute list and ordered children; text leaves carry raw content that
//! may include `{{identifier}}` placeholders.

pub mod snapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text {
        content: String,
    },
}

/// Build an element node. Pure construction: any tag string and any child
/// list are accepted as-is. An empty tag produces a node the renderer will
/// materialize as an unusable element rather than an error here.
pub fn create_element(
    tag: impl Into<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
) -> Node {
    Node::Element {
        tag: tag.into(),
        attributes,
        children,
    }
}

/// Attribute pair shorthand for literal trees.
pub fn attr(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

impl Node {
    pub fn text(content: impl Into<String>) -> Node {
        Node::Text {
            content: content.into(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            Node::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// The importer's discard sentinel: a text node with no content.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Node::Text { content } if content.is_empty())
    }
}
