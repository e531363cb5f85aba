use engine::{Engine, Node, StateValue, attr, create_element};
use host::{HostDocument, NodeId};

fn span_with(text: &str) -> Node {
    create_element("span", vec![], vec![Node::text(text)])
}

/// Render `tree` under a fresh body and return (engine, paired root id).
fn rendered(doc: &mut HostDocument, tree: Node) -> (Engine, NodeId) {
    let body = doc.create_element("body");
    let mut engine = Engine::new();
    engine.render(doc, tree, body);
    let root = engine.mount().expect("render pairs a root");
    (engine, root)
}

fn span_text(doc: &HostDocument, span: NodeId) -> String {
    let children = doc.children(span);
    assert_eq!(children.len(), 1, "span should hold one text node");
    doc.text(children[0]).unwrap_or("").to_string()
}

#[test]
fn selective_substitution() {
    let mut doc = HostDocument::new();
    let (mut engine, root) = rendered(&mut doc, span_with("hi {{name}}"));

    engine.set_state(&mut doc, [("name", "frost")]);
    assert_eq!(span_text(&doc, root), "hi frost");
}

#[test]
fn unknown_keys_leave_the_template_literal_in_place() {
    let mut doc = HostDocument::new();
    let (mut engine, root) = rendered(&mut doc, span_with("{{missing}}"));

    engine.set_state(&mut doc, [("unrelated", 1)]);
    assert_eq!(span_text(&doc, root), "{{missing}}");
}

#[test]
fn empty_merge_is_idempotent() {
    let mut doc = HostDocument::new();
    let (mut engine, root) = rendered(&mut doc, span_with("{{counter}}"));

    engine.set_state(&mut doc, [("counter", 3)]);
    assert_eq!(span_text(&doc, root), "3");

    engine.set_state(&mut doc, std::iter::empty::<(String, StateValue)>());
    assert_eq!(span_text(&doc, root), "3");
}

#[test]
fn last_resolved_placeholder_wins() {
    // Each resolvable occurrence rewrites the whole content from the original
    // template, so with two resolvable keys only the second replacement
    // survives, and the first placeholder reappears verbatim.
    let mut doc = HostDocument::new();
    let (mut engine, root) = rendered(&mut doc, span_with("{{a}}-{{b}}"));

    engine.set_state(&mut doc, [("a", "A"), ("b", "B")]);
    assert_eq!(span_text(&doc, root), "{{a}}-B");
}

#[test]
fn only_first_key_resolvable_substitutes_the_first() {
    let mut doc = HostDocument::new();
    let (mut engine, root) = rendered(&mut doc, span_with("{{a}}-{{b}}"));

    engine.set_state(&mut doc, [("a", "A")]);
    assert_eq!(span_text(&doc, root), "A-{{b}}");
}

#[test]
fn placeholder_keys_are_trimmed_before_lookup() {
    let mut doc = HostDocument::new();
    let (mut engine, root) = rendered(&mut doc, span_with("{{  counter  }}"));

    engine.set_state(&mut doc, [("counter", 5)]);
    assert_eq!(span_text(&doc, root), "5");
}

#[test]
fn diverged_subtree_freezes_while_siblings_update() {
    let mut doc = HostDocument::new();
    let tree = create_element(
        "div",
        vec![],
        vec![span_with("{{x}}"), span_with("{{x}}")],
    );
    let (mut engine, root) = rendered(&mut doc, tree);
    let spans: Vec<NodeId> = doc.children(root).to_vec();

    // out-of-band host mutation: the first span gains an extra child
    let stray = doc.create_text("stray");
    doc.append_child(spans[0], stray).unwrap();

    engine.set_state(&mut doc, [("x", 1)]);

    // frozen branch keeps its template text, sibling still updates
    assert_eq!(doc.text(doc.children(spans[0])[0]), Some("{{x}}"));
    assert_eq!(span_text(&doc, spans[1]), "1");
}

#[test]
fn end_to_end_counter() {
    let mut doc = HostDocument::new();
    let tree = create_element(
        "div",
        vec![attr("id", "app")],
        vec![span_with("{{counter}}")],
    );
    let (mut engine, root) = rendered(&mut doc, tree);
    let span = doc.children(root)[0];

    engine.set_state(&mut doc, [("counter", 1)]);
    assert_eq!(span_text(&doc, span), "1");

    engine.set_state(&mut doc, [("counter", 2)]);
    assert_eq!(span_text(&doc, span), "2");
}

#[test]
fn state_merged_before_render_applies_on_the_render_pass() {
    let mut doc = HostDocument::new();
    let body = doc.create_element("body");
    let mut engine = Engine::new();

    // merge while uninitialized: no pairing yet, nothing to walk
    engine.set_state(&mut doc, [("name", "early")]);
    assert!(!engine.is_rendered());

    engine.render(&mut doc, span_with("hi {{name}}"), body);
    let root = engine.mount().unwrap();
    assert_eq!(span_text(&doc, root), "hi early");
}

#[test]
fn missing_mount_leaves_engine_uninitialized() {
    let mut doc = HostDocument::new();
    let mut engine = Engine::new();

    engine.render(&mut doc, span_with("{{x}}"), NodeId::INVALID);
    assert!(!engine.is_rendered());

    // setState while uninitialized merges without walking anything
    engine.set_state(&mut doc, [("x", 1)]);
    assert_eq!(engine.state().get("x"), Some(&StateValue::Integer(1)));
}

#[test]
fn rerender_overwrites_the_pairing() {
    let mut doc = HostDocument::new();
    let body = doc.create_element("body");
    let mut engine = Engine::new();

    engine.render(&mut doc, span_with("{{x}}"), body);
    let first = engine.mount().unwrap();

    engine.render(&mut doc, span_with("{{x}}!"), body);
    let second = engine.mount().unwrap();
    assert_ne!(first, second);
    assert_eq!(doc.children(body), &[first, second]);

    engine.set_state(&mut doc, [("x", 9)]);
    // only the currently paired subtree is patched
    assert_eq!(span_text(&doc, first), "{{x}}");
    assert_eq!(span_text(&doc, second), "9!");
}

#[test]
fn adopt_updates_the_existing_subtree_in_place() {
    let mut doc = HostDocument::new();
    let app = doc.create_element("div");
    doc.set_attribute(app, "id", "app").unwrap();
    let span = doc.create_element("span");
    let text = doc.create_text("count: {{counter}}");
    doc.append_child(span, text).unwrap();
    doc.append_child(app, span).unwrap();

    let mut engine = Engine::new();
    engine.adopt(&mut doc, app);
    assert!(engine.is_rendered());
    assert_eq!(engine.mount(), Some(app));

    engine.set_state(&mut doc, [("counter", 4)]);
    assert_eq!(doc.text(text), Some("count: 4"));
    // nothing was materialized; the page still has its original single span
    assert_eq!(doc.children(app), &[span]);
}

#[test]
fn adopted_page_with_a_comment_child_freezes_that_level() {
    // Import drops the comment from the abstract child list while the host
    // keeps it, so the child counts disagree at the root and updates stop
    // there. Deliberate consequence of the import filter.
    let mut doc = HostDocument::new();
    let app = doc.create_element("div");
    let note = doc.create_comment("marker");
    let text = doc.create_text("{{x}}");
    doc.append_child(app, note).unwrap();
    doc.append_child(app, text).unwrap();

    let mut engine = Engine::new();
    engine.adopt(&mut doc, app);
    engine.set_state(&mut doc, [("x", 1)]);

    assert_eq!(doc.text(text), Some("{{x}}"));
}
