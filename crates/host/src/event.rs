use crate::document::NodeId;
use std::rc::Rc;

/// Host event categories the document can dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyPress,
    KeyDown,
    Load,
    MouseOver,
}

impl EventKind {
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::KeyPress => "keypress",
            EventKind::KeyDown => "keydown",
            EventKind::Load => "load",
            EventKind::MouseOver => "mouseover",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Event {
    pub kind: EventKind,
    pub target: NodeId,
}

/// Listener callbacks are shared, single-threaded callables. The whole system
/// runs on one logical thread of control, so `Rc` rather than `Arc`.
pub type Listener = Rc<dyn Fn(&Event)>;
