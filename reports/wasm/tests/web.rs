//! Browser tests, run with `wasm-pack test --headless --firefox reports/wasm`.

#![cfg(target_arch = "wasm32")]

use footprint::platform::{EventKind, Platform};
use footprint_wasm::WebPlatform;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn platform() -> WebPlatform {
    WebPlatform::new().unwrap()
}

#[wasm_bindgen_test]
fn creates_and_finds_elements() {
    let p = platform();
    let body = p.body().unwrap();
    let section = p.create("div").unwrap();
    p.set_attr(&section, "id", "wasm-test-section");
    p.add_class(&section, "tab-section");
    p.append(&body, &section);

    let found = p.by_id("wasm-test-section").unwrap();
    assert!(p.has_class(&found, "tab-section"));
    assert_eq!(p.by_class(Some(&body), "tab-section").len(), 1);

    p.remove(&found);
    assert!(p.by_id("wasm-test-section").is_none());
}

#[wasm_bindgen_test]
fn input_value_reaches_listener() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let p = platform();
    let body = p.body().unwrap();
    let slider = p.create("input").unwrap();
    p.set_attr(&slider, "type", "range");
    p.append(&body, &slider);

    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    p.listen(
        &slider,
        EventKind::Input,
        Box::new(move |info| *sink.borrow_mut() = info.value.clone()),
    );

    p.set_value(&slider, "3");
    let event = web_sys::Event::new("input").unwrap();
    slider.dispatch_event(&event).unwrap();

    assert_eq!(seen.borrow().as_deref(), Some("3"));
    p.remove(&slider);
}

#[wasm_bindgen_test]
fn clock_is_monotonic() {
    let p = platform();
    let first = p.now();
    assert!(p.now() >= first);
}

#[wasm_bindgen_test]
fn removed_elements_release_their_listeners() {
    let p = platform();
    let body = p.body().unwrap();
    let container = p.create("div").unwrap();
    p.append(&body, &container);
    let before = p.listener_count();

    p.listen(&container, EventKind::Click, Box::new(|_| {}));
    for _ in 0..4 {
        let child = p.create("button").unwrap();
        p.append(&container, &child);
        p.listen(&child, EventKind::Click, Box::new(|_| {}));
    }
    assert_eq!(p.listener_count(), before + 5);

    p.clear(&container);
    assert_eq!(p.listener_count(), before + 1);

    p.remove(&container);
    assert_eq!(p.listener_count(), before);
}
