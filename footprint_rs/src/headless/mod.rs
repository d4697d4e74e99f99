//! In-memory [`Platform`] with a virtual clock.
//!
//! Used by the test-suite and the `footprint` CLI to run the pages without a
//! browser. Time only moves when [`HeadlessPlatform::advance`] or
//! [`HeadlessPlatform::settle`] is called; animation frames fire every
//! [`FRAME_MS`] of virtual time.
//!
//! ```rust
//! use std::rc::Rc;
//! use footprint::headless::HeadlessPlatform;
//! use footprint::{ReportConfig, ReportView};
//! use footprint_report::types::{FootprintRecord, TabId};
//!
//! let platform = Rc::new(HeadlessPlatform::with_report_page());
//! let view = ReportView::mount_seeded(platform.clone(), FootprintRecord::default(), ReportConfig::default(), 7);
//! view.switch_tab(TabId::Data);
//! platform.settle();
//! assert!(platform.has_class_id("data-tab", "active"));
//! ```

mod clock;
mod dom;
mod fixtures;

use std::cell::{Cell, RefCell};

pub use clock::FRAME_MS;
pub use dom::NodeId;

use crate::platform::{
    Callback, EventInfo, EventKind, FrameCallback, Listener, Platform, ShareData, Tick, TimerHandle,
};
use clock::{Clock, Job};
use dom::{BODY, Dom};

/// Upper bound for [`HeadlessPlatform::settle`], in virtual ms.
const SETTLE_LIMIT_MS: f64 = 120_000.0;

/// Browser stand-in backed by an in-memory element tree.
pub struct HeadlessPlatform {
    dom: RefCell<Dom>,
    clock: RefCell<Clock>,
    resize_listeners: RefCell<Vec<dom::SharedListener>>,
    viewport_width: Cell<f64>,
    confirm_answer: Cell<bool>,
    confirm_prompts: RefCell<Vec<String>>,
    share_supported: Cell<bool>,
    shared: RefCell<Vec<ShareData>>,
    clipboard: RefCell<Option<String>>,
    clipboard_fails: Cell<bool>,
    navigations: RefCell<Vec<String>>,
    scrolled_into_view: RefCell<Vec<NodeId>>,
    scroll_top_count: Cell<usize>,
    location: RefCell<String>,
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessPlatform {
    /// Empty document: `<html><body></body></html>`, 1280px wide, confirm
    /// answers yes, no native share.
    pub fn new() -> Self {
        Self {
            dom: RefCell::new(Dom::new()),
            clock: RefCell::new(Clock::default()),
            resize_listeners: RefCell::new(Vec::new()),
            viewport_width: Cell::new(1280.0),
            confirm_answer: Cell::new(true),
            confirm_prompts: RefCell::new(Vec::new()),
            share_supported: Cell::new(false),
            shared: RefCell::new(Vec::new()),
            clipboard: RefCell::new(None),
            clipboard_fails: Cell::new(false),
            navigations: RefCell::new(Vec::new()),
            scrolled_into_view: RefCell::new(Vec::new()),
            scroll_top_count: Cell::new(0),
            location: RefCell::new("https://ecofootprint.local/report.html".to_string()),
        }
    }

    // -- building documents ---------------------------------------------

    /// Append an element under `parent` with an optional id and classes.
    pub fn element(&self, parent: NodeId, tag: &str, id: Option<&str>, classes: &[&str]) -> NodeId {
        let mut dom = self.dom.borrow_mut();
        let node = dom.create(tag);
        if let Some(id) = id {
            dom.get_mut(node).attrs.insert("id".into(), id.into());
        }
        for class in classes {
            dom.add_class(node, class);
        }
        dom.append(parent, node);
        node
    }

    /// The `<body>` element.
    pub fn body_node(&self) -> NodeId {
        BODY
    }

    // -- driving time ---------------------------------------------------

    /// Move the virtual clock forward, running due timers and frames.
    pub fn advance(&self, ms: f64) {
        let limit = self.clock.borrow().now() + ms;
        loop {
            let job = self.clock.borrow_mut().next_job(limit);
            match job {
                Some((_, Job::Once(cb))) => cb(),
                Some((_, Job::Repeat(tick))) => (tick.borrow_mut())(),
                Some((at, Job::Frames(frames))) => {
                    for frame in frames {
                        frame(at);
                    }
                }
                None => break,
            }
        }
    }

    /// Advance until no one-shot timers or frames remain. Repeating timers
    /// keep running meanwhile.
    pub fn settle(&self) {
        let start = self.clock.borrow().now();
        while self.clock.borrow().has_transient_work()
            && self.clock.borrow().now() - start < SETTLE_LIMIT_MS
        {
            self.advance(FRAME_MS);
        }
    }

    /// Live timers, one-shot and repeating.
    pub fn timer_count(&self) -> usize {
        self.clock.borrow().timer_count()
    }

    /// Element listeners held anywhere in the tree.
    pub fn listener_count(&self) -> usize {
        self.dom.borrow().listener_count()
    }

    /// Live repeating timers.
    pub fn repeating_timer_count(&self) -> usize {
        self.clock.borrow().repeating_count()
    }

    // -- firing events --------------------------------------------------

    fn dispatch(&self, node: NodeId, kind: EventKind, value: Option<String>) {
        let listeners = self.dom.borrow().listeners(node, kind);
        let info = EventInfo {
            direct: true,
            value: value.clone(),
        };
        for listener in &listeners {
            (listener.borrow_mut())(&info);
        }
        if kind != EventKind::Click {
            return;
        }
        // clicks bubble to ancestors
        let mut current = self.dom.borrow().get(node).parent;
        while let Some(ancestor) = current {
            let listeners = self.dom.borrow().listeners(ancestor, kind);
            let info = EventInfo {
                direct: false,
                value: value.clone(),
            };
            for listener in &listeners {
                (listener.borrow_mut())(&info);
            }
            current = self.dom.borrow().get(ancestor).parent;
        }
    }

    pub fn click(&self, node: NodeId) {
        self.dispatch(node, EventKind::Click, None);
    }

    /// Click the element with `id`. Returns false when it does not exist.
    pub fn click_id(&self, id: &str) -> bool {
        match self.by_id(id) {
            Some(node) => {
                self.click(node);
                true
            }
            None => false,
        }
    }

    pub fn hover(&self, node: NodeId, entering: bool) {
        let kind = if entering {
            EventKind::PointerEnter
        } else {
            EventKind::PointerLeave
        };
        self.dispatch(node, kind, None);
    }

    /// Set a control's value and fire `input`.
    pub fn input(&self, node: NodeId, value: &str) {
        self.dom.borrow_mut().get_mut(node).value = Some(value.to_string());
        self.dispatch(node, EventKind::Input, Some(value.to_string()));
    }

    /// Set a control's value and fire `change`.
    pub fn change(&self, node: NodeId, value: &str) {
        self.dom.borrow_mut().get_mut(node).value = Some(value.to_string());
        self.dispatch(node, EventKind::Change, Some(value.to_string()));
    }

    /// Resize the viewport and fire resize listeners.
    pub fn resize(&self, width: f64) {
        self.viewport_width.set(width);
        let listeners: Vec<_> = self.resize_listeners.borrow().clone();
        let info = EventInfo::default();
        for listener in &listeners {
            (listener.borrow_mut())(&info);
        }
    }

    // -- inspection -----------------------------------------------------

    pub fn tag(&self, node: NodeId) -> String {
        self.dom.borrow().get(node).tag.clone()
    }

    pub fn text(&self, node: NodeId) -> String {
        self.dom.borrow().get(node).text.clone()
    }

    /// Text of the element with `id`.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.by_id(id).map(|n| self.text(n))
    }

    /// Every text the element has displayed, oldest first.
    pub fn text_history(&self, node: NodeId) -> Vec<String> {
        self.dom.borrow().get(node).text_history.clone()
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.dom.borrow().get(node).classes.clone()
    }

    /// Whether the element with `id` exists and carries `class`.
    pub fn has_class_id(&self, id: &str, class: &str) -> bool {
        self.by_id(id).is_some_and(|n| self.has_class(&n, class))
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.dom.borrow().get(node).styles.get(property).cloned()
    }

    pub fn inner_html(&self, node: NodeId) -> Option<String> {
        self.dom.borrow().get(node).inner_html.clone()
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        self.dom.borrow().is_attached(node)
    }

    // -- browser service stubs ------------------------------------------

    /// Answer given to subsequent confirm prompts.
    pub fn set_confirm_answer(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn confirm_prompts(&self) -> Vec<String> {
        self.confirm_prompts.borrow().clone()
    }

    pub fn set_share_supported(&self, supported: bool) {
        self.share_supported.set(supported);
    }

    pub fn shared(&self) -> Vec<ShareData> {
        self.shared.borrow().clone()
    }

    pub fn clipboard(&self) -> Option<String> {
        self.clipboard.borrow().clone()
    }

    /// Make clipboard writes fail silently.
    pub fn set_clipboard_fails(&self, fails: bool) {
        self.clipboard_fails.set(fails);
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn scrolled_into_view(&self) -> Vec<NodeId> {
        self.scrolled_into_view.borrow().clone()
    }

    pub fn scroll_top_count(&self) -> usize {
        self.scroll_top_count.get()
    }
}

impl Platform for HeadlessPlatform {
    type Node = NodeId;

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.dom.borrow().find_id(id)
    }

    fn by_class(&self, scope: Option<&NodeId>, class: &str) -> Vec<NodeId> {
        let dom = self.dom.borrow();
        let start = scope.copied().unwrap_or(dom::ROOT);
        dom.descendants(start)
            .into_iter()
            .filter(|n| dom.has_class(*n, class))
            .collect()
    }

    fn by_tag(&self, scope: Option<&NodeId>, tag: &str) -> Vec<NodeId> {
        let dom = self.dom.borrow();
        let tag = tag.to_ascii_lowercase();
        let start = scope.copied().unwrap_or(dom::ROOT);
        dom.descendants(start)
            .into_iter()
            .filter(|n| dom.get(*n).tag == tag)
            .collect()
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.dom.borrow().get(*node).children.clone()
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn create(&self, tag: &str) -> Option<NodeId> {
        Some(self.dom.borrow_mut().create(tag))
    }

    fn append(&self, parent: &NodeId, child: &NodeId) {
        self.dom.borrow_mut().append(*parent, *child);
    }

    fn remove(&self, node: &NodeId) {
        let mut dom = self.dom.borrow_mut();
        dom.release_listeners(*node, true);
        dom.detach(*node);
    }

    fn clear(&self, node: &NodeId) {
        let mut dom = self.dom.borrow_mut();
        dom.release_listeners(*node, false);
        dom.clear(*node);
    }

    fn set_inner_html(&self, node: &NodeId, html: &str) {
        let mut dom = self.dom.borrow_mut();
        dom.release_listeners(*node, false);
        dom.clear(*node);
        dom.get_mut(*node).inner_html = Some(html.to_string());
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.dom.borrow_mut().set_text(*node, text);
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        self.dom.borrow_mut().add_class(*node, class);
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.dom.borrow_mut().remove_class(*node, class);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.dom.borrow().has_class(*node, class)
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.dom
            .borrow_mut()
            .get_mut(*node)
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn attr(&self, node: &NodeId, name: &str) -> Option<String> {
        self.dom.borrow().get(*node).attrs.get(name).cloned()
    }

    fn set_attr(&self, node: &NodeId, name: &str, value: &str) {
        self.dom
            .borrow_mut()
            .get_mut(*node)
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn value(&self, node: &NodeId) -> Option<String> {
        let dom = self.dom.borrow();
        let el = dom.get(*node);
        el.value.clone().or_else(|| el.attrs.get("value").cloned())
    }

    fn set_value(&self, node: &NodeId, value: &str) {
        self.dom.borrow_mut().get_mut(*node).value = Some(value.to_string());
    }

    fn listen(&self, node: &NodeId, kind: EventKind, listener: Listener) {
        self.dom
            .borrow_mut()
            .get_mut(*node)
            .listeners
            .push((kind, std::rc::Rc::new(RefCell::new(listener))));
    }

    fn on_resize(&self, listener: Listener) {
        self.resize_listeners
            .borrow_mut()
            .push(std::rc::Rc::new(RefCell::new(listener)));
    }

    fn now(&self) -> f64 {
        self.clock.borrow().now()
    }

    fn schedule(&self, delay_ms: u32, callback: Callback) -> TimerHandle {
        self.clock.borrow_mut().schedule(delay_ms, callback)
    }

    fn schedule_repeating(&self, period_ms: u32, tick: Tick) -> TimerHandle {
        self.clock.borrow_mut().schedule_repeating(period_ms, tick)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.clock.borrow_mut().cancel(handle);
    }

    fn request_frame(&self, callback: FrameCallback) {
        self.clock.borrow_mut().request_frame(callback);
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirm_prompts.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn can_share(&self) -> bool {
        self.share_supported.get()
    }

    fn share(&self, data: &ShareData) {
        self.shared.borrow_mut().push(data.clone());
    }

    fn write_clipboard(&self, text: &str, on_done: Callback) {
        if self.clipboard_fails.get() {
            return;
        }
        *self.clipboard.borrow_mut() = Some(text.to_string());
        // resolves asynchronously in a browser
        self.clock.borrow_mut().schedule(0, on_done);
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }

    fn scroll_to_top(&self) {
        self.scroll_top_count.set(self.scroll_top_count.get() + 1);
    }

    fn scroll_into_view(&self, node: &NodeId) {
        self.scrolled_into_view.borrow_mut().push(*node);
    }

    fn location(&self) -> String {
        self.location.borrow().clone()
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width.get()
    }
}
