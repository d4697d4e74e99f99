//! Question page order and the prev/next buttons shared by the slider pages.

use std::rc::Rc;

use serde::Serialize;

use crate::platform::{EventKind, Platform};

/// Pages of the questionnaire, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Index,
    Housing,
    Household,
    Solar,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Index, Page::Housing, Page::Household, Page::Solar];

    /// File the page is served from.
    pub fn file(self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::Housing => "housing.html",
            Page::Household => "household.html",
            Page::Solar => "solar.html",
        }
    }

    pub fn from_file(file: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.file() == file)
    }

    pub fn previous(self) -> Option<Page> {
        match self {
            Page::Index => None,
            Page::Housing => Some(Page::Index),
            Page::Household => Some(Page::Housing),
            Page::Solar => Some(Page::Household),
        }
    }

    pub fn next(self) -> Option<Page> {
        match self {
            Page::Index => Some(Page::Housing),
            Page::Housing => Some(Page::Household),
            Page::Household => Some(Page::Solar),
            Page::Solar => None,
        }
    }
}

/// Wire `.prev-question-btn` / `.next-question-btn` to the neighbours of
/// `page`. Listeners only hold a weak platform reference.
pub(crate) fn bind_question_nav<P: Platform + 'static>(platform: &Rc<P>, page: Page) {
    let buttons = [
        ("prev-question-btn", page.previous()),
        ("next-question-btn", page.next()),
    ];
    for (class, target) in buttons {
        let Some(target) = target else {
            continue;
        };
        for button in platform.by_class(None, class) {
            let weak = Rc::downgrade(platform);
            platform.listen(
                &button,
                EventKind::Click,
                Box::new(move |_| {
                    if let Some(platform) = weak.upgrade() {
                        tracing::debug!("navigating to {}", target.file());
                        platform.navigate(target.file());
                    }
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_are_symmetric() {
        for page in Page::ALL {
            if let Some(next) = page.next() {
                assert_eq!(next.previous(), Some(page));
            }
        }
        assert_eq!(Page::Index.previous(), None);
        assert_eq!(Page::Solar.next(), None);
    }

    #[test]
    fn files_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_file(page.file()), Some(page));
        }
        assert_eq!(Page::from_file("report.html"), None);
    }
}
