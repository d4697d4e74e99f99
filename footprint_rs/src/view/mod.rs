//! The report page controller.
//!
//! [`ReportView`] owns one [`FootprintRecord`] and renders it into the page
//! through a [`Platform`]. The page entry point owns the view; anything that
//! needs to drive it from outside (the "show solutions" buttons, the wasm
//! handle) gets a clone of the view rather than a global.
//!
//! ```text
//! ReportView::mount
//! ├── bind_navigation      nav tabs, mobile selector, show-solutions buttons
//! ├── render_summary       headline and fact slots
//! ├── render_earth_icons   ceil(earths) icons, last one partial
//! ├── render_skyline       landmark buildings, windows, background, atmosphere
//! ├── bind_emotions        emotion options
//! ├── bind_actions         share / retake buttons
//! ├── render_charts        data tab charts
//! ├── start_counters       count-up animation of the headline numbers
//! └── hide_loading         loading overlay fades out
//! ```
//!
//! Listeners and timers hold a `Weak` reference to the view, so a dropped
//! view turns every pending callback into a no-op.

mod actions;
mod feelings;
mod notify;
mod skyline;
mod summary;
mod tabs;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ReportConfig;
use crate::metrics::{AirQuality, atmosphere_score};
use crate::platform::{EventInfo, EventKind, Platform};
use footprint_report::types::{Emotion, FootprintRecord, TabId};

pub use actions::{RETAKE_DONE_MESSAGE, RETAKE_PROMPT, SHARE_COPIED_MESSAGE, share_data};
pub use notify::NotificationKind;
pub use summary::{comparison_label, render_earth_icons, render_summary};

struct ViewState {
    record: FootprintRecord,
    tab: TabId,
    emotion: Option<Emotion>,
    loading: bool,
    rng: StdRng,
}

struct Inner<P: Platform> {
    platform: Rc<P>,
    config: ReportConfig,
    state: RefCell<ViewState>,
}

/// Interactive report page bound to a platform.
pub struct ReportView<P: Platform + 'static> {
    inner: Rc<Inner<P>>,
}

impl<P: Platform + 'static> Clone for ReportView<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P: Platform + 'static> ReportView<P> {
    /// Mount with an entropy-seeded random source.
    pub fn mount(platform: Rc<P>, record: FootprintRecord, config: ReportConfig) -> Self {
        Self::mount_with_rng(platform, record, config, StdRng::from_entropy())
    }

    /// Mount with a fixed seed, for reproducible skylines and retakes.
    pub fn mount_seeded(platform: Rc<P>, record: FootprintRecord, config: ReportConfig, seed: u64) -> Self {
        Self::mount_with_rng(platform, record, config, StdRng::seed_from_u64(seed))
    }

    pub fn mount_with_rng(
        platform: Rc<P>,
        record: FootprintRecord,
        config: ReportConfig,
        rng: StdRng,
    ) -> Self {
        let view = Self {
            inner: Rc::new(Inner {
                platform,
                config,
                state: RefCell::new(ViewState {
                    record,
                    tab: TabId::Summary,
                    emotion: None,
                    loading: false,
                    rng,
                }),
            }),
        };

        view.bind_navigation();
        view.render_summary();
        view.render_earth_icons();
        view.render_skyline();
        view.bind_emotions();
        view.bind_actions();
        view.render_charts();
        view.start_counters();
        view.hide_loading();
        view.bind_resize();

        tracing::debug!("report view mounted");
        view
    }

    pub fn platform(&self) -> &Rc<P> {
        &self.inner.platform
    }

    pub fn config(&self) -> &ReportConfig {
        &self.inner.config
    }

    /// Snapshot of the current record.
    pub fn record(&self) -> FootprintRecord {
        self.inner.state.borrow().record.clone()
    }

    pub fn current_tab(&self) -> TabId {
        self.inner.state.borrow().tab
    }

    pub fn selected_emotion(&self) -> Option<Emotion> {
        self.inner.state.borrow().emotion
    }

    /// True between a confirmed retake and its completion.
    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    /// Air-quality band of the current record.
    pub fn air_quality(&self) -> AirQuality {
        AirQuality::from_score(atmosphere_score(&self.inner.state.borrow().record.categories))
    }

    fn downgrade(&self) -> Weak<Inner<P>> {
        Rc::downgrade(&self.inner)
    }

    fn upgrade(weak: &Weak<Inner<P>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    /// Attach a listener that runs `handler` while the view is alive.
    fn bind(
        &self,
        node: &P::Node,
        kind: EventKind,
        handler: impl Fn(&Self, &EventInfo) + 'static,
    ) {
        let weak = self.downgrade();
        self.platform().listen(
            node,
            kind,
            Box::new(move |info| {
                if let Some(view) = Self::upgrade(&weak) {
                    handler(&view, info);
                }
            }),
        );
    }

    /// Run `f` after `delay_ms` if the view is still alive.
    fn schedule(&self, delay_ms: u32, f: impl FnOnce(&Self) + 'static) {
        let weak = self.downgrade();
        self.platform().schedule(
            delay_ms,
            Box::new(move || {
                if let Some(view) = Self::upgrade(&weak) {
                    f(&view);
                }
            }),
        );
    }

    fn bind_resize(&self) {
        let weak = self.downgrade();
        self.platform().on_resize(Box::new(move |_| {
            if let Some(view) = Self::upgrade(&weak) {
                view.render_skyline();
            }
        }));
    }
}
