//! Tab switching, reveal animation and the mobile tab selector.

use std::rc::Rc;

use footprint_report::types::TabId;

use super::ReportView;
use crate::platform::{EventKind, Platform};

/// Viewports at or below this width get a `<select>` tab switcher.
const MOBILE_BREAKPOINT: f64 = 768.0;

impl<P: Platform + 'static> ReportView<P> {
    /// Activate `tab`. A missing `{tab}-tab` section leaves everything as is.
    pub fn switch_tab(&self, tab: TabId) {
        let p = self.platform();
        let Some(target) = p.by_id(&tab.section_id()) else {
            tracing::debug!("no section for tab {}", tab.id());
            return;
        };

        for section in p.by_class(None, "tab-section") {
            p.remove_class(&section, "active");
        }
        p.add_class(&target, "active");

        for nav in p.by_class(None, "nav-tab") {
            if p.attr(&nav, "data-tab").as_deref() == Some(tab.id()) {
                p.add_class(&nav, "active");
            } else {
                p.remove_class(&nav, "active");
            }
        }
        for select in p.by_class(None, "mobile-tab-select") {
            p.set_value(&select, tab.id());
        }

        self.inner.state.borrow_mut().tab = tab;
        tracing::debug!("switched to tab {}", tab.id());
        self.reveal(&target);
    }

    /// Activate the tab named by a `data-tab` value. Unknown ids are ignored.
    pub fn switch_tab_by_id(&self, id: &str) {
        match TabId::from_id(id) {
            Some(tab) => self.switch_tab(tab),
            None => tracing::debug!("ignoring unknown tab id {id:?}"),
        }
    }

    /// Jump to the solutions tab.
    pub fn show_solutions(&self) {
        self.switch_tab(TabId::Solutions);
    }

    /// Fade the section's children in, one after another.
    fn reveal(&self, section: &P::Node) {
        let p = self.platform();
        let timing = &self.config().timing;
        let transition = format!(
            "all {}s cubic-bezier(0.25, 0.8, 0.25, 1)",
            f64::from(timing.reveal_duration_ms) / 1000.0
        );

        for (index, child) in p.children(section).into_iter().enumerate() {
            p.set_style(&child, "opacity", "0");
            p.set_style(&child, "transform", "translateY(30px)");

            let platform = Rc::clone(p);
            let transition = transition.clone();
            let delay = u32::try_from(index)
                .unwrap_or(u32::MAX)
                .saturating_mul(timing.reveal_stagger_ms);
            p.schedule(
                delay,
                Box::new(move || {
                    platform.set_style(&child, "transition", &transition);
                    platform.set_style(&child, "opacity", "1");
                    platform.set_style(&child, "transform", "translateY(0)");
                }),
            );
        }
    }

    pub(super) fn bind_navigation(&self) {
        let p = self.platform();

        for nav in p.by_class(None, "nav-tab") {
            if let Some(id) = p.attr(&nav, "data-tab") {
                self.bind(&nav, EventKind::Click, move |view, _| view.switch_tab_by_id(&id));
            }
        }

        for button in p.by_class(None, "show-solutions-btn") {
            self.bind(&button, EventKind::Click, |view, _| view.show_solutions());
        }

        if p.viewport_width() <= MOBILE_BREAKPOINT {
            self.create_mobile_selector();
        }
    }

    fn create_mobile_selector(&self) {
        let p = self.platform();
        let Some(nav) = p.by_tag(None, "nav").into_iter().next() else {
            return;
        };
        let Some(select) = p.create("select") else {
            return;
        };
        p.add_class(&select, "mobile-tab-select");

        for tab in TabId::ALL {
            if let Some(option) = p.create("option") {
                p.set_attr(&option, "value", tab.id());
                p.set_text(&option, tab.label());
                p.append(&select, &option);
            }
        }
        p.set_value(&select, self.current_tab().id());

        self.bind(&select, EventKind::Change, |view, info| {
            if let Some(value) = info.value.as_deref() {
                view.switch_tab_by_id(value);
            }
        });
        p.append(&nav, &select);
    }
}
