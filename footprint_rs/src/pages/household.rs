//! Household size slider.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;

use super::Page;
use super::flow::bind_question_nav;
use crate::platform::{EventKind, Platform};

pub const MIN_HOUSEHOLD: u32 = 1;
pub const MAX_HOUSEHOLD: u32 = 10;

/// Image shown for one household size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HouseholdImage {
    pub src: &'static str,
    pub alt: &'static str,
}

const fn image(src: &'static str, alt: &'static str) -> HouseholdImage {
    HouseholdImage { src, alt }
}

/// Sizes 1 to 10, in order.
pub const HOUSEHOLD_IMAGES: [HouseholdImage; 10] = [
    image("https://via.placeholder.com/120x120/4a90e2/ffffff?text=1", "1 person"),
    image("https://via.placeholder.com/120x120/38a169/ffffff?text=2", "2 people"),
    image("https://via.placeholder.com/120x120/e53e3e/ffffff?text=3", "3 people"),
    image("https://via.placeholder.com/120x120/805ad5/ffffff?text=4", "4 people"),
    image("https://via.placeholder.com/120x120/dd6b20/ffffff?text=5", "5 people"),
    image("https://via.placeholder.com/120x120/319795/ffffff?text=6", "6 people"),
    image("https://via.placeholder.com/120x120/d69e2e/ffffff?text=7", "7 people"),
    image("https://via.placeholder.com/120x120/c53030/ffffff?text=8", "8 people"),
    image("https://via.placeholder.com/120x120/553c9a/ffffff?text=9", "9 people"),
    image("https://via.placeholder.com/120x120/2d3748/ffffff?text=10%2B", "10+ people"),
];

/// Size whose image stands in for values outside the table.
const FALLBACK_SIZE: u32 = 4;

/// `"1 person"`, `"N people"`, `"10+ people"`.
pub fn household_label(size: u32) -> String {
    match size {
        1 => "1 person".to_string(),
        MAX_HOUSEHOLD => "10+ people".to_string(),
        n => format!("{n} people"),
    }
}

pub fn household_image(size: u32) -> &'static HouseholdImage {
    let index = if (MIN_HOUSEHOLD..=MAX_HOUSEHOLD).contains(&size) {
        size
    } else {
        FALLBACK_SIZE
    };
    &HOUSEHOLD_IMAGES[(index - 1) as usize]
}

/// Mounted household page.
pub struct HouseholdPage<P: Platform + 'static> {
    platform: Rc<P>,
    size: Rc<Cell<Option<u32>>>,
}

impl<P: Platform + 'static> HouseholdPage<P> {
    pub fn mount(platform: Rc<P>) -> Self {
        let page = Self {
            platform: Rc::clone(&platform),
            size: Rc::new(Cell::new(None)),
        };

        if let Some(slider) = platform.by_id("householdSlider") {
            platform.set_attr(&slider, "min", &MIN_HOUSEHOLD.to_string());
            platform.set_attr(&slider, "max", &MAX_HOUSEHOLD.to_string());
            if let Some(value) = platform.value(&slider) {
                page.select_value(&value);
            }

            let weak = Rc::downgrade(&platform);
            let size = Rc::clone(&page.size);
            platform.listen(
                &slider,
                EventKind::Input,
                Box::new(move |info| {
                    if let (Some(platform), Some(value)) = (weak.upgrade(), info.value.as_deref()) {
                        apply(&*platform, &size, value);
                    }
                }),
            );
        }
        bind_question_nav(&platform, Page::Household);
        page
    }

    pub fn size(&self) -> Option<u32> {
        self.size.get()
    }

    /// Apply a raw slider value. Non-numeric values are ignored.
    pub fn select_value(&self, value: &str) -> bool {
        apply(&*self.platform, &self.size, value)
    }
}

fn apply<P: Platform>(platform: &P, current: &Cell<Option<u32>>, value: &str) -> bool {
    let Ok(size) = value.trim().parse::<u32>() else {
        tracing::debug!("ignoring household value {value:?}");
        return false;
    };

    if let Some(display) = platform.by_id("household-value") {
        platform.set_text(&display, &household_label(size));
    }
    if let Some(img) = platform.by_id("household-main-image") {
        let picture = household_image(size);
        platform.set_attr(&img, "src", picture.src);
        platform.set_attr(&img, "alt", picture.alt);
    }
    current.set(Some(size));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(household_label(1), "1 person");
        assert_eq!(household_label(5), "5 people");
        assert_eq!(household_label(10), "10+ people");
    }

    #[test]
    fn images_fall_back_to_four() {
        assert_eq!(household_image(10).alt, "10+ people");
        assert!(household_image(10).src.ends_with("text=10%2B"));
        assert_eq!(household_image(0), household_image(4));
        assert_eq!(household_image(11).alt, "4 people");
    }
}
