use crate::event::{Event, EventKind, Listener};
use std::collections::HashMap;

/// Opaque key for a node within a document. Ids are allocated once and never
/// reused, so a stale id from a removed subtree stays invalid forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Reserved sentinel for "unassigned/invalid" identity.
    pub const INVALID: NodeId = NodeId(0);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Comment,
}

#[derive(Debug)]
pub enum HostError {
    MissingNode(NodeId),
    WrongNodeKind(NodeId),
    InvalidParent(NodeId),
    CycleDetected { parent: NodeId, child: NodeId },
}

pub struct HostDocument {
    nodes: Vec<NodeRecord>,
    live: HashMap<NodeId, usize>,
    next_id: u32,
}

impl HostDocument {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            live: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.insert(RecordKind::Element {
            tag: tag.into(),
            attributes: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.insert(RecordKind::Text { text: text.into() })
    }

    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.insert(RecordKind::Comment { text: text.into() })
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.record(id).map(|record| match record.kind {
            RecordKind::Element { .. } => NodeKind::Element,
            RecordKind::Text { .. } => NodeKind::Text,
            RecordKind::Comment { .. } => NodeKind::Comment,
        })
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.record(id)?.kind {
            RecordKind::Element { ref tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attributes(&self, id: NodeId) -> Option<&[(String, String)]> {
        match self.record(id)?.kind {
            RecordKind::Element { ref attributes, .. } => Some(attributes),
            _ => None,
        }
    }

    pub fn attribute<'a>(&'a self, id: NodeId, name: &str) -> Option<&'a str> {
        self.attributes(id)?
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.record(id).map(|record| &record.children[..]).unwrap_or(&[])
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.record(id)?.parent
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.record(id)?.kind {
            RecordKind::Text { ref text } | RecordKind::Comment { ref text } => Some(text),
            _ => None,
        }
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), HostError> {
        let index = self.live_index(id)?;
        match &mut self.nodes[index].kind {
            RecordKind::Element { attributes, .. } => {
                if let Some(slot) = attributes.iter_mut().find(|(k, _)| k == name) {
                    slot.1.clear();
                    slot.1.push_str(value);
                } else {
                    attributes.push((name.to_string(), value.to_string()));
                }
                Ok(())
            }
            _ => Err(HostError::WrongNodeKind(id)),
        }
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<(), HostError> {
        let index = self.live_index(id)?;
        match &mut self.nodes[index].kind {
            RecordKind::Text { text: existing } => {
                existing.clear();
                existing.push_str(text);
                Ok(())
            }
            _ => Err(HostError::WrongNodeKind(id)),
        }
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), HostError> {
        if parent == child {
            debug_assert!(false, "cannot create cycle");
            return Err(HostError::CycleDetected { parent, child });
        }
        if self.is_descendant(child, parent) {
            debug_assert!(false, "cannot create cycle");
            return Err(HostError::CycleDetected { parent, child });
        }
        let parent_index = self.live_index(parent)?;
        let child_index = self.live_index(child)?;
        if !self.nodes[parent_index].allows_children() {
            debug_assert!(false, "parent node cannot have children");
            return Err(HostError::InvalidParent(parent));
        }
        if self.nodes[child_index].parent.is_some() {
            debug_assert!(false, "child already has a parent");
            return Err(HostError::InvalidParent(child));
        }
        self.nodes[parent_index].children.push(child);
        self.nodes[child_index].parent = Some(parent);
        Ok(())
    }

    /// Detach a node and drop its whole subtree from the live map.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), HostError> {
        let index = self.live_index(id)?;
        if let Some(parent) = self.nodes[index].parent.take() {
            if let Some(parent_index) = self.live.get(&parent).copied() {
                self.nodes[parent_index].children.retain(|k| *k != id);
            }
        }
        let children = std::mem::take(&mut self.nodes[index].children);
        self.live.remove(&id);
        for child in children {
            if self.live.contains_key(&child) {
                self.remove_node(child)?;
            }
        }
        Ok(())
    }

    pub fn add_event_listener(
        &mut self,
        id: NodeId,
        kind: EventKind,
        listener: Listener,
    ) -> Result<(), HostError> {
        let index = self.live_index(id)?;
        self.nodes[index].listeners.push((kind, listener));
        Ok(())
    }

    pub fn listener_count(&self, id: NodeId, kind: EventKind) -> usize {
        self.record(id)
            .map(|record| record.listeners.iter().filter(|(k, _)| *k == kind).count())
            .unwrap_or(0)
    }

    /// Synchronously invoke every listener registered on `target` for `kind`,
    /// in registration order. Dispatch on an unknown node is a no-op.
    pub fn dispatch(&self, target: NodeId, kind: EventKind) {
        let Some(record) = self.record(target) else {
            log::trace!(target: "host.dispatch", "dispatch {kind:?} on missing node {target:?}");
            return;
        };
        let event = Event { kind, target };
        for (registered, listener) in &record.listeners {
            if *registered == kind {
                listener(&event);
            }
        }
    }

    fn insert(&mut self, kind: RecordKind) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let index = self.nodes.len();
        self.nodes.push(NodeRecord {
            kind,
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        });
        self.live.insert(id, index);
        id
    }

    fn record(&self, id: NodeId) -> Option<&NodeRecord> {
        self.live.get(&id).map(|&index| &self.nodes[index])
    }

    fn live_index(&self, id: NodeId) -> Result<usize, HostError> {
        self.live.get(&id).copied().ok_or(HostError::MissingNode(id))
    }

    fn is_descendant(&self, ancestor: NodeId, maybe_descendant: NodeId) -> bool {
        let Some(&index) = self.live.get(&ancestor) else {
            return false;
        };
        let mut stack = Vec::new();
        stack.extend(self.nodes[index].children.iter().copied());
        while let Some(current) = stack.pop() {
            if current == maybe_descendant {
                return true;
            }
            if let Some(&child_index) = self.live.get(&current) {
                stack.extend(self.nodes[child_index].children.iter().copied());
            }
        }
        false
    }
}

impl Default for HostDocument {
    fn default() -> Self {
        Self::new()
    }
}

struct NodeRecord {
    kind: RecordKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listeners: Vec<(EventKind, Listener)>,
}

impl NodeRecord {
    fn allows_children(&self) -> bool {
        matches!(self.kind, RecordKind::Element { .. })
    }
}

enum RecordKind {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text {
        text: String,
    },
    Comment {
        text: String,
    },
}
