//! Rendering and browser capabilities the pages depend on.
//!
//! Page logic never touches a DOM directly. It talks to a [`Platform`]:
//! the browser binding implements it over `web-sys`, and
//! [`crate::headless::HeadlessPlatform`] implements it in memory with a
//! virtual clock for tests and the CLI.
//!
//! All lookups return `Option`/empty collections rather than errors; callers
//! skip the update when an element is absent.

/// One-shot callback scheduled on a timer.
pub type Callback = Box<dyn FnOnce()>;

/// Animation-frame callback, receives the frame timestamp in ms.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Repeating timer callback.
pub type Tick = Box<dyn FnMut()>;

/// Event listener.
pub type Listener = Box<dyn FnMut(&EventInfo)>;

/// Events the pages listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    PointerEnter,
    PointerLeave,
    /// Value of a range/text control changed while dragging or typing
    Input,
    /// Committed value change (select elements)
    Change,
}

impl EventKind {
    /// DOM event name.
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::PointerEnter => "mouseenter",
            EventKind::PointerLeave => "mouseleave",
            EventKind::Input => "input",
            EventKind::Change => "change",
        }
    }
}

/// What a listener learns about the event that fired.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventInfo {
    /// The event originated on the listening element itself, not a descendant.
    pub direct: bool,
    /// Current value of the control, for input and change events.
    pub value: Option<String>,
}

/// Handle of a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// Payload for the native share sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Element lookup, mutation, timers and browser services.
///
/// Implementations are single-threaded. Callbacks may call back into the
/// platform, so implementations must not hold internal borrows while
/// invoking them.
pub trait Platform {
    /// Element handle.
    type Node: Clone + 'static;

    // -- lookup --------------------------------------------------------

    /// Element with the given id, if attached to the document.
    fn by_id(&self, id: &str) -> Option<Self::Node>;

    /// Elements carrying `class`, in document order, below `scope` (or the
    /// whole document when `scope` is `None`).
    fn by_class(&self, scope: Option<&Self::Node>, class: &str) -> Vec<Self::Node>;

    /// Elements with the given tag name, in document order, below `scope`.
    fn by_tag(&self, scope: Option<&Self::Node>, tag: &str) -> Vec<Self::Node>;

    /// Direct element children.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Document body.
    fn body(&self) -> Option<Self::Node>;

    // -- tree ----------------------------------------------------------

    /// Create a detached element.
    fn create(&self, tag: &str) -> Option<Self::Node>;

    fn append(&self, parent: &Self::Node, child: &Self::Node);

    /// Detach an element from its parent. Listeners on it and its
    /// descendants may be released; a removed element is not reattached.
    fn remove(&self, node: &Self::Node);

    /// Drop all children, with their listeners.
    fn clear(&self, node: &Self::Node);

    /// Replace the content with pre-rendered markup. Listeners on the old
    /// children are released.
    fn set_inner_html(&self, node: &Self::Node, html: &str);

    // -- content and styling -------------------------------------------

    fn set_text(&self, node: &Self::Node, text: &str);

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Set an inline style property (`opacity`, `transform`, ...).
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attr(&self, node: &Self::Node, name: &str, value: &str);

    /// Current value of a form control.
    fn value(&self, node: &Self::Node) -> Option<String>;

    fn set_value(&self, node: &Self::Node, value: &str);

    // -- events --------------------------------------------------------

    fn listen(&self, node: &Self::Node, kind: EventKind, listener: Listener);

    /// Listen for viewport resizes.
    fn on_resize(&self, listener: Listener);

    // -- scheduling ----------------------------------------------------

    /// Milliseconds from an arbitrary fixed origin, monotonic.
    fn now(&self) -> f64;

    fn schedule(&self, delay_ms: u32, callback: Callback) -> TimerHandle;

    fn schedule_repeating(&self, period_ms: u32, tick: Tick) -> TimerHandle;

    /// Cancel a one-shot or repeating timer. Unknown handles are ignored.
    fn cancel(&self, handle: TimerHandle);

    /// Run `callback` before the next repaint.
    fn request_frame(&self, callback: FrameCallback);

    // -- browser services ----------------------------------------------

    /// Modal yes/no question. `false` when no answer can be obtained.
    fn confirm(&self, message: &str) -> bool;

    fn can_share(&self) -> bool;

    fn share(&self, data: &ShareData);

    /// Write `text` to the clipboard and run `on_done` once it succeeded.
    /// Failures are dropped.
    fn write_clipboard(&self, text: &str, on_done: Callback);

    fn navigate(&self, url: &str);

    fn scroll_to_top(&self);

    fn scroll_into_view(&self, node: &Self::Node);

    /// Current page URL.
    fn location(&self) -> String;

    /// Viewport width in CSS pixels.
    fn viewport_width(&self) -> f64;
}
