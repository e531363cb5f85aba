//! Reactive micro-templating engine.
//!
//! Pairs an abstract tree with a live host subtree and keeps text content in
//! sync with an application state map via `{{identifier}}` placeholders.
//!
//! Lifecycle: `Uninitialized -> Rendered` on the first successful [`Engine::render`]
//! or [`Engine::adopt`]; every [`Engine::set_state`] afterwards is a
//! `Rendered -> Rendered` self-loop running one synchronous update walk.
//! There is no teardown state.
//!
//! The engine raises no errors: a missing mount, an unresolved handler name,
//! a structurally diverged subtree or an unknown placeholder key all degrade
//! to no-ops, with trace logs as the only witness.

mod handlers;
mod importer;
mod renderer;
mod state;
mod template;
mod update;

pub use crate::handlers::{Handler, HandlerRegistry};
pub use crate::importer::import;
pub use crate::renderer::render_into;
pub use crate::state::{StateMap, StateValue};
pub use vdom::{Node, attr, create_element};

use host::{Event, HostDocument, NodeId};
use std::rc::Rc;

pub struct Engine {
    tree: Option<Node>,
    mount: Option<NodeId>,
    state: StateMap,
    handlers: HandlerRegistry,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_state(StateMap::new())
    }

    /// Construct with an initial state map. This is the only point where the
    /// state is replaced wholesale; everything after goes through merges.
    pub fn with_state(state: StateMap) -> Self {
        Self {
            tree: None,
            mount: None,
            state,
            handlers: HandlerRegistry::new(),
        }
    }

    /// Register a named handler for declarative event binding. Names are
    /// resolved at import time; registering after an import does not attach
    /// anything retroactively.
    pub fn register_handler<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&Event) + 'static,
    {
        self.handlers.register(name, Rc::new(handler));
    }

    pub fn state(&self) -> &StateMap {
        &self.state
    }

    pub fn is_rendered(&self) -> bool {
        self.tree.is_some() && self.mount.is_some()
    }

    /// The host node currently paired with the abstract tree root.
    pub fn mount(&self) -> Option<NodeId> {
        self.mount
    }

    /// Materialize `tree` under `parent`, pair the created host root with it,
    /// and run one update walk. A missing parent skips the render entirely and
    /// the engine stays uninitialized. Re-invocation overwrites the previous
    /// pairing; no reconciliation against the old tree happens.
    pub fn render(&mut self, doc: &mut HostDocument, tree: Node, parent: NodeId) {
        if !doc.contains(parent) {
            log::warn!(target: "engine", "render skipped: mount {parent:?} is not in the document");
            return;
        }
        match renderer::render_into(doc, &tree, parent) {
            Ok(root) => {
                self.tree = Some(tree);
                self.mount = Some(root);
                self.run_update(doc);
            }
            Err(err) => {
                log::warn!(target: "engine", "render failed: {err:?}");
            }
        }
    }

    /// Pair with an EXISTING host subtree: import it (recovering event
    /// bindings) and adopt the mount node as the paired root, without
    /// materializing anything new.
    pub fn adopt(&mut self, doc: &mut HostDocument, mount: NodeId) {
        if !doc.contains(mount) {
            log::warn!(target: "engine", "adopt skipped: mount {mount:?} is not in the document");
            return;
        }
        let tree = importer::import(doc, mount, &self.handlers);
        self.tree = Some(tree);
        self.mount = Some(mount);
        self.run_update(doc);
    }

    /// Merge entries into the state map, then run one synchronous update walk
    /// over the paired trees. Before the first render/adopt this only merges.
    pub fn set_state<I, K, V>(&mut self, doc: &mut HostDocument, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StateValue>,
    {
        self.state.merge(entries);
        self.run_update(doc);
    }

    /// Standalone import using this engine's handler registry.
    pub fn import_from_host(&self, doc: &mut HostDocument, node: NodeId) -> Node {
        importer::import(doc, node, &self.handlers)
    }

    fn run_update(&mut self, doc: &mut HostDocument) {
        let (Some(mount), Some(tree)) = (self.mount, self.tree.as_ref()) else {
            return;
        };
        update::update_tree(doc, mount, tree, &self.state);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
