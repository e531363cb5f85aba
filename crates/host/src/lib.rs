//! Live host document tree.
//!
//! This crate stands in for the platform side of the system: a mutable,
//! observable tree of elements, text and comments, plus synchronous event
//! dispatch. The templating engine only ever talks to it through the
//! primitives exposed here (create node, set attribute, append child, read
//! kind/attributes/children, read/write text content, add listener).
//!
//! Invariants:
//! - Node ids are never reused; `NodeId::INVALID` (zero) is never handed out.
//! - A node has at most one parent; append cannot create cycles.
//! - Child ordering is explicit and deterministic.
//! - Attribute order is preserved; setting an existing name overwrites in place.

mod document;
pub mod event;
pub mod snapshot;

pub use crate::document::{HostDocument, HostError, NodeId, NodeKind};
pub use crate::event::{Event, EventKind, Listener};
