//! [`Platform`] over the live browser DOM.

use std::cell::RefCell;
use std::collections::HashMap;

use footprint::platform::{
    Callback, EventInfo, EventKind, FrameCallback, Listener, Platform, ShareData, Tick,
    TimerHandle,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Document, Element, Event, HtmlCollection, HtmlElement, HtmlInputElement, HtmlSelectElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

type EventClosure = Closure<dyn FnMut(Event)>;

struct BoundListener {
    element: Element,
    event: &'static str,
    closure: EventClosure,
}

/// Browser window and document, plus the closures that must outlive a call.
pub struct WebPlatform {
    window: Window,
    document: Document,
    // Element listeners are released when their element is removed or cleared
    listeners: RefCell<Vec<BoundListener>>,
    window_listeners: RefCell<Vec<EventClosure>>,
    intervals: RefCell<HashMap<i32, Closure<dyn FnMut()>>>,
}

impl WebPlatform {
    /// `None` outside a browser main thread.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            listeners: RefCell::new(Vec::new()),
            window_listeners: RefCell::new(Vec::new()),
            intervals: RefCell::new(HashMap::new()),
        })
    }

    /// Number of element listeners currently held.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Drop the listeners of every element inside `root`, and of `root`
    /// itself when `including_root` is set.
    fn release_listeners(&self, root: &Element, including_root: bool) {
        let retired: Vec<BoundListener> = {
            let mut listeners = self.listeners.borrow_mut();
            let (retired, kept) = listeners.drain(..).partition(|bound| {
                let node: &web_sys::Node = &bound.element;
                root.contains(Some(node)) && (including_root || bound.element != *root)
            });
            *listeners = kept;
            retired
        };
        for bound in &retired {
            let _ = bound.element.remove_event_listener_with_callback(
                bound.event,
                bound.closure.as_ref().unchecked_ref(),
            );
        }
        if !retired.is_empty() {
            tracing::trace!("releasing {} listeners", retired.len());
            self.release_later(retired);
        }
    }

    /// Drop `value` on a fresh task. Closures may be released from inside
    /// their own invocation (a close button removing its modal).
    fn release_later<T: 'static>(&self, value: T) {
        let release = Closure::once_into_js(move || drop(value));
        let _ = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(release.unchecked_ref(), 0);
    }
}

fn collect(collection: HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    element.get_attribute("value")
}

fn event_info(event: &Event) -> EventInfo {
    let target = event.target();
    let current = event.current_target();
    let direct = match (&target, &current) {
        (Some(t), Some(c)) => js_sys::Object::is(t.as_ref(), c.as_ref()),
        _ => false,
    };
    let value = current
        .as_ref()
        .and_then(|c| c.dyn_ref::<Element>())
        .and_then(control_value);
    EventInfo { direct, value }
}

// In-page anchors are handled by the page logic, not by the browser jump.
fn is_hash_link(event: &Event) -> bool {
    event
        .current_target()
        .and_then(|c| c.dyn_into::<Element>().ok())
        .filter(|el| el.tag_name().eq_ignore_ascii_case("a"))
        .and_then(|el| el.get_attribute("href"))
        .is_some_and(|href| href.starts_with('#'))
}

impl Platform for WebPlatform {
    type Node = Element;

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn by_class(&self, scope: Option<&Element>, class: &str) -> Vec<Element> {
        match scope {
            Some(el) => collect(el.get_elements_by_class_name(class)),
            None => collect(self.document.get_elements_by_class_name(class)),
        }
    }

    fn by_tag(&self, scope: Option<&Element>, tag: &str) -> Vec<Element> {
        match scope {
            Some(el) => collect(el.get_elements_by_tag_name(tag)),
            None => collect(self.document.get_elements_by_tag_name(tag)),
        }
    }

    fn children(&self, node: &Element) -> Vec<Element> {
        collect(node.children())
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn create(&self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).ok()
    }

    fn append(&self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn remove(&self, node: &Element) {
        self.release_listeners(node, true);
        node.remove();
    }

    fn clear(&self, node: &Element) {
        self.release_listeners(node, false);
        node.set_inner_html("");
    }

    fn set_inner_html(&self, node: &Element, html: &str) {
        self.release_listeners(node, false);
        node.set_inner_html(html);
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }

    fn attr(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attr(&self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn value(&self, node: &Element) -> Option<String> {
        control_value(node)
    }

    fn set_value(&self, node: &Element, value: &str) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else {
            let _ = node.set_attribute("value", value);
        }
    }

    fn listen(&self, node: &Element, kind: EventKind, mut listener: Listener) {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            if kind == EventKind::Click && is_hash_link(&event) {
                event.prevent_default();
            }
            listener(&event_info(&event));
        }) as Box<dyn FnMut(Event)>);

        if node
            .add_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.listeners.borrow_mut().push(BoundListener {
                element: node.clone(),
                event: kind.dom_name(),
                closure,
            });
        }
    }

    fn on_resize(&self, mut listener: Listener) {
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            listener(&EventInfo::default());
        }) as Box<dyn FnMut(Event)>);

        if self
            .window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.window_listeners.borrow_mut().push(closure);
        }
    }

    fn now(&self) -> f64 {
        self.window
            .performance()
            .map_or_else(js_sys::Date::now, |p| p.now())
    }

    fn schedule(&self, delay_ms: u32, callback: Callback) -> TimerHandle {
        let closure = Closure::once_into_js(move || callback());
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            )
            .unwrap_or_else(|err| {
                tracing::warn!("setTimeout failed: {:?}", err);
                0
            });
        TimerHandle(id)
    }

    fn schedule_repeating(&self, period_ms: u32, mut tick: Tick) -> TimerHandle {
        let closure = Closure::wrap(Box::new(move || tick()) as Box<dyn FnMut()>);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                i32::try_from(period_ms).unwrap_or(i32::MAX),
            ) {
            Ok(id) => {
                self.intervals.borrow_mut().insert(id, closure);
                TimerHandle(id)
            }
            Err(err) => {
                tracing::warn!("setInterval failed: {:?}", err);
                TimerHandle(0)
            }
        }
    }

    fn cancel(&self, handle: TimerHandle) {
        self.window.clear_timeout_with_handle(handle.0);
        self.window.clear_interval_with_handle(handle.0);

        let retired = self.intervals.borrow_mut().remove(&handle.0);
        if let Some(closure) = retired {
            // The interval may be cancelling itself from inside its own tick
            self.release_later(closure);
        }
    }

    fn request_frame(&self, callback: FrameCallback) {
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        let _ = self.window.request_animation_frame(closure.unchecked_ref());
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn can_share(&self) -> bool {
        js_sys::Reflect::has(&self.window.navigator(), &JsValue::from_str("share"))
            .unwrap_or(false)
    }

    fn share(&self, data: &ShareData) {
        let navigator = self.window.navigator();
        let payload = js_sys::Object::new();
        for (key, value) in [
            ("title", &data.title),
            ("text", &data.text),
            ("url", &data.url),
        ] {
            let _ = js_sys::Reflect::set(&payload, &key.into(), &JsValue::from_str(value));
        }

        let Some(share) = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        else {
            return;
        };

        match share.call1(&navigator, &payload) {
            Ok(promise) => {
                if let Ok(promise) = promise.dyn_into::<js_sys::Promise>() {
                    spawn_local(async move {
                        // Dismissing the share sheet rejects; nothing to report
                        if let Err(err) = JsFuture::from(promise).await {
                            tracing::debug!("share dismissed: {:?}", err);
                        }
                    });
                }
            }
            Err(err) => tracing::warn!("navigator.share failed: {:?}", err),
        }
    }

    fn write_clipboard(&self, text: &str, on_done: Callback) {
        let clipboard = self.window.navigator().clipboard();
        let promise = clipboard.write_text(text);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => on_done(),
                Err(err) => tracing::warn!("clipboard write failed: {:?}", err),
            }
        });
    }

    fn navigate(&self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            tracing::warn!("navigation to {} failed: {:?}", url, err);
        }
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn location(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }
}
