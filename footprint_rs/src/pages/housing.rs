//! Housing type slider.

use std::cell::Cell;
use std::rc::Rc;

use super::Page;
use super::flow::bind_question_nav;
use crate::platform::{EventKind, Platform};

/// Slider positions 0-4.
pub const HOUSING_TYPES: [&str; 5] = ["1RK", "1 BHK", "2 BHK", "3 BHK", "3BHK+"];

pub fn housing_label(index: usize) -> Option<&'static str> {
    HOUSING_TYPES.get(index).copied()
}

/// Mounted housing page.
pub struct HousingPage<P: Platform + 'static> {
    platform: Rc<P>,
    selected: Rc<Cell<Option<usize>>>,
}

impl<P: Platform + 'static> HousingPage<P> {
    pub fn mount(platform: Rc<P>) -> Self {
        let page = Self {
            platform: Rc::clone(&platform),
            selected: Rc::new(Cell::new(None)),
        };

        if let Some(slider) = platform.by_id("housingSlider") {
            if let Some(value) = platform.value(&slider) {
                page.select_value(&value);
            }
            let weak = Rc::downgrade(&platform);
            let selected = Rc::clone(&page.selected);
            platform.listen(
                &slider,
                EventKind::Input,
                Box::new(move |info| {
                    if let (Some(platform), Some(value)) = (weak.upgrade(), info.value.as_deref()) {
                        apply(&*platform, &selected, value);
                    }
                }),
            );
        }
        bind_question_nav(&platform, Page::Housing);
        page
    }

    /// Currently shown housing type index.
    pub fn selected(&self) -> Option<usize> {
        self.selected.get()
    }

    /// Apply a raw slider value. Values outside 0-4 are ignored.
    pub fn select_value(&self, value: &str) -> bool {
        apply(&*self.platform, &self.selected, value)
    }
}

fn apply<P: Platform>(platform: &P, selected: &Cell<Option<usize>>, value: &str) -> bool {
    let Some((index, label)) = value
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|i| housing_label(i).map(|l| (i, l)))
    else {
        tracing::debug!("ignoring housing value {value:?}");
        return false;
    };

    if let Some(display) = platform.by_id("housing-value") {
        platform.set_text(&display, label);
    }
    for (i, image) in platform.by_class(None, "housing-image").iter().enumerate() {
        if i == index {
            platform.add_class(image, "active");
        } else {
            platform.remove_class(image, "active");
        }
    }
    selected.set(Some(index));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_slider_range() {
        assert_eq!(housing_label(0), Some("1RK"));
        assert_eq!(housing_label(4), Some("3BHK+"));
        assert_eq!(housing_label(5), None);
    }
}
