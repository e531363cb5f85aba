//! Name-indexed handler registry and the declarative event-attribute table.
//!
//! Handlers are owned by the engine instance and resolved by string name at
//! import time only; an unresolved name is skipped, never an error.

use host::{Event, EventKind};
use std::collections::HashMap;
use std::rc::Rc;

pub type Handler = Rc<dyn Fn(&Event)>;

#[derive(Default)]
pub struct HandlerRegistry {
    entries: HashMap<String, Handler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, handler: Handler) {
        self.entries.insert(name.into(), handler);
    }

    pub fn resolve(&self, name: &str) -> Option<Handler> {
        self.entries.get(name).map(Rc::clone)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

/// Recognized declarative attribute keys and the host events they bind.
/// Matched case-insensitively so both host-lowercased (`onclick`) and
/// hand-authored (`onClick`) trees resolve.
const EVENT_ATTRIBUTES: &[(&str, EventKind)] = &[
    ("onclick", EventKind::Click),
    ("onkeypress", EventKind::KeyPress),
    ("onkeydown", EventKind::KeyDown),
    ("onload", EventKind::Load),
    ("onmouseover", EventKind::MouseOver),
];

pub(crate) fn host_event_for(attribute: &str) -> Option<EventKind> {
    EVENT_ATTRIBUTES
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(attribute))
        .map(|(_, kind)| *kind)
}
