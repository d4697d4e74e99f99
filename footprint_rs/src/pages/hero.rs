//! Landing page: background slideshow, anchor navigation and the start
//! button.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use super::Page;
use crate::config::TimingConfig;
use crate::platform::{EventKind, Platform};
use crate::timer::RepeatingTimer;

struct Slideshow<P: Platform> {
    platform: Rc<P>,
    slides: Vec<P::Node>,
    current: Cell<usize>,
}

impl<P: Platform> Slideshow<P> {
    fn advance(&self) {
        if self.slides.is_empty() {
            return;
        }
        let current = self.current.get();
        let next = (current + 1) % self.slides.len();
        self.platform.remove_class(&self.slides[current], "active");
        self.platform.add_class(&self.slides[next], "active");
        self.current.set(next);
    }
}

/// Mounted landing page. Dropping it stops the slideshow.
pub struct HeroPage<P: Platform + 'static> {
    slideshow: Rc<Slideshow<P>>,
    timer: Rc<RepeatingTimer<P>>,
}

impl<P: Platform + 'static> HeroPage<P> {
    pub fn mount(platform: Rc<P>, timing: &TimingConfig) -> Self {
        let slides = platform.by_class(None, "background-slide");
        let current = slides
            .iter()
            .position(|s| platform.has_class(s, "active"))
            .unwrap_or(0);
        for (i, slide) in slides.iter().enumerate() {
            if i == current {
                platform.add_class(slide, "active");
            } else {
                platform.remove_class(slide, "active");
            }
        }

        let slideshow = Rc::new(Slideshow {
            platform: Rc::clone(&platform),
            slides,
            current: Cell::new(current),
        });
        let ticker = Rc::clone(&slideshow);
        let timer = Rc::new(RepeatingTimer::new(
            Rc::clone(&platform),
            timing.slideshow_interval_ms,
            move || ticker.advance(),
        ));

        let page = Self { slideshow, timer };
        page.bind_hover();
        bind_nav_links(&platform);
        bind_start_button(&platform);
        fade_in_content(&platform, timing.hero_fade_delay_ms);

        if page.slide_count() > 1 {
            page.timer.start();
        }
        tracing::debug!(slides = page.slide_count(), "hero mounted");
        page
    }

    pub fn slide_count(&self) -> usize {
        self.slideshow.slides.len()
    }

    /// Index of the active slide.
    pub fn current_slide(&self) -> usize {
        self.slideshow.current.get()
    }

    pub fn next_slide(&self) {
        self.slideshow.advance();
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_running()
    }

    pub fn pause(&self) {
        self.timer.stop();
    }

    pub fn resume(&self) {
        if self.slide_count() > 1 {
            self.timer.start();
        }
    }

    fn bind_hover(&self) {
        let platform = &self.slideshow.platform;
        let playable = self.slide_count() > 1;
        for container in platform.by_class(None, "hero-container") {
            let timer: Weak<RepeatingTimer<P>> = Rc::downgrade(&self.timer);
            platform.listen(
                &container,
                EventKind::PointerEnter,
                Box::new(move |_| {
                    if let Some(timer) = timer.upgrade() {
                        timer.stop();
                    }
                }),
            );
            let timer = Rc::downgrade(&self.timer);
            platform.listen(
                &container,
                EventKind::PointerLeave,
                Box::new(move |_| {
                    if let Some(timer) = timer.upgrade().filter(|_| playable) {
                        timer.start();
                    }
                }),
            );
        }
    }
}

fn bind_nav_links<P: Platform + 'static>(platform: &Rc<P>) {
    for nav in platform.by_class(None, "nav-links") {
        for link in platform.by_tag(Some(&nav), "a") {
            let Some(href) = platform.attr(&link, "href") else {
                continue;
            };
            let weak = Rc::downgrade(platform);
            platform.listen(
                &link,
                EventKind::Click,
                Box::new(move |_| {
                    let Some(platform) = weak.upgrade() else {
                        return;
                    };
                    let Some(target) = href.strip_prefix('#') else {
                        return;
                    };
                    tracing::debug!("navigating to {target}");
                    if target == "home" {
                        platform.scroll_to_top();
                    } else if let Some(section) = platform.by_id(target) {
                        platform.scroll_into_view(&section);
                    }
                }),
            );
        }
    }
}

fn bind_start_button<P: Platform + 'static>(platform: &Rc<P>) {
    for button in platform.by_class(None, "start-questions-btn") {
        let weak = Rc::downgrade(platform);
        platform.listen(
            &button,
            EventKind::Click,
            Box::new(move |_| {
                if let Some(platform) = weak.upgrade() {
                    platform.navigate(Page::Index.file());
                }
            }),
        );
    }
}

fn fade_in_content<P: Platform + 'static>(platform: &Rc<P>, delay_ms: u32) {
    let Some(content) = platform.by_class(None, "hero-content").into_iter().next() else {
        return;
    };
    platform.set_style(&content, "opacity", "0");
    platform.set_style(&content, "transform", "translateY(30px)");

    let p = Rc::clone(platform);
    platform.schedule(
        delay_ms,
        Box::new(move || {
            p.set_style(&content, "transition", "opacity 1s ease, transform 1s ease");
            p.set_style(&content, "opacity", "1");
            p.set_style(&content, "transform", "translateY(0)");
        }),
    );
}
