use engine::Engine;
use host::{EventKind, HostDocument};
use mimalloc::MiMalloc;
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let mut doc = HostDocument::new();

    // a small pre-existing page, the kind the engine would normally adopt
    // from the surrounding platform
    let app = doc.create_element("div");
    doc.set_attribute(app, "id", "app").unwrap();

    let heading = doc.create_element("h1");
    let title = doc.create_text("hello {{name}}");
    doc.append_child(heading, title).unwrap();
    doc.append_child(app, heading).unwrap();

    let button = doc.create_element("button");
    doc.set_attribute(button, "onclick", "increment").unwrap();
    let label = doc.create_text("counter: {{counter}}");
    doc.append_child(button, label).unwrap();
    doc.append_child(app, button).unwrap();

    let clicks = Rc::new(Cell::new(0i64));
    let mut engine = Engine::new();
    {
        let clicks = Rc::clone(&clicks);
        engine.register_handler("increment", move |_| clicks.set(clicks.get() + 1));
    }

    engine.adopt(&mut doc, app);
    engine.set_state(&mut doc, [("name", "world"), ("counter", "0")]);
    println!("{}\n", host::snapshot::render(&doc, app));

    for _ in 0..2 {
        thread::sleep(Duration::from_millis(250));
        doc.dispatch(button, EventKind::Click);
        engine.set_state(&mut doc, [("counter", clicks.get())]);
        println!("{}\n", host::snapshot::render(&doc, app));
    }
}
