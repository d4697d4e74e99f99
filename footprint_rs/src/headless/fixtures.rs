//! Minimal documents carrying the element ids and classes each page binds to.

use footprint_report::types::{Emotion, TabId};

use super::{HeadlessPlatform, NodeId};
use crate::platform::Platform;

impl HeadlessPlatform {
    /// Report page: navigation, five tab sections and every summary slot.
    pub fn with_report_page() -> Self {
        let p = Self::new();
        let body = p.body_node();

        let nav = p.element(body, "nav", None, &[]);
        for tab in TabId::ALL {
            let classes: &[&str] = if tab == TabId::Summary {
                &["nav-tab", "active"]
            } else {
                &["nav-tab"]
            };
            let button = p.element(nav, "button", None, classes);
            p.set_attr(&button, "data-tab", tab.id());
            p.set_text(&button, tab.label());
        }

        p.element(body, "div", Some("loadingOverlay"), &["loading-overlay"]);
        let main = p.element(body, "main", None, &[]);

        let summary = section(&p, main, TabId::Summary, true);
        let hero = p.element(summary, "div", None, &["hero-card"]);
        for id in ["overshootDate", "earthsNumber", "comparisonPercent"] {
            p.element(hero, "span", Some(id), &[]);
        }
        let earths = p.element(summary, "div", None, &["earths-card"]);
        p.element(earths, "div", Some("earthIcons"), &["earth-icons"]);
        let stats = p.element(summary, "div", None, &["stats-grid"]);
        for id in ["ecologicalFootprint", "carbonFootprint", "carbonPercentage"] {
            p.element(stats, "span", Some(id), &[]);
        }
        let skyline = p.element(summary, "div", None, &["skyline-card"]);
        p.element(skyline, "div", Some("atmosphereLayer"), &["atmosphere-layer"]);
        p.element(skyline, "div", Some("timeIndicator"), &[]);
        p.element(skyline, "div", Some("skylineBuildings"), &[]);
        p.element(summary, "button", Some("showSolutionsButton"), &["show-solutions-btn"]);

        let facts = section(&p, main, TabId::Facts, false);
        let facts_grid = p.element(facts, "div", None, &["facts-card"]);
        for id in ["transportCO2", "energyUsage", "waterSaved", "localFood", "plasticSaved"] {
            p.element(facts_grid, "span", Some(id), &[]);
        }
        p.element(facts, "div", None, &["tips-card"]);

        let feelings = section(&p, main, TabId::Feelings, false);
        let options = p.element(feelings, "div", None, &["emotion-grid"]);
        for emotion in Emotion::ALL {
            let option = p.element(
                options,
                "button",
                Some(&format!("emotion-{}", emotion.id())),
                &["emotion-option"],
            );
            p.set_attr(&option, "data-emotion", emotion.id());
        }
        let response = p.element(feelings, "div", Some("emotionResponse"), &["hidden"]);
        p.element(response, "span", Some("responseEmoji"), &[]);
        p.element(response, "h3", Some("responseTitle"), &[]);
        p.element(response, "p", Some("responseMessage"), &[]);

        let data = section(&p, main, TabId::Data, false);
        let land = p.element(data, "div", None, &["chart-card"]);
        p.element(land, "div", Some("landTypeChart"), &[]);
        let consumption = p.element(data, "div", None, &["chart-card"]);
        p.element(consumption, "div", Some("consumptionChart"), &[]);

        let solutions = section(&p, main, TabId::Solutions, false);
        let actions = p.element(solutions, "div", None, &["actions-card"]);
        p.element(actions, "button", Some("shareButton"), &["share-results-btn"]);
        p.element(actions, "button", Some("retakeButton"), &["retake-quiz-btn"]);

        p
    }

    /// Hero page with `slides` background slides (the first one active).
    pub fn with_hero_page(slides: usize) -> Self {
        let p = Self::new();
        let body = p.body_node();

        let nav = p.element(body, "ul", None, &["nav-links"]);
        for (id, anchor) in [("navHome", "#home"), ("navAbout", "#about"), ("navQuiz", "#quiz")] {
            let item = p.element(nav, "li", None, &[]);
            let link = p.element(item, "a", Some(id), &[]);
            p.set_attr(&link, "href", anchor);
        }

        let container = p.element(body, "div", Some("heroContainer"), &["hero-container"]);
        for i in 0..slides {
            let classes: &[&str] = if i == 0 {
                &["background-slide", "active"]
            } else {
                &["background-slide"]
            };
            p.element(container, "div", Some(&format!("slide-{i}")), classes);
        }
        let content = p.element(container, "div", Some("heroContent"), &["hero-content"]);
        p.element(content, "button", Some("startButton"), &["start-questions-btn"]);
        p.element(body, "section", Some("about"), &[]);

        p
    }

    /// Housing question page, slider at index 0.
    pub fn with_housing_page() -> Self {
        let p = Self::new();
        let body = p.body_node();
        let slider = p.element(body, "input", Some("housingSlider"), &[]);
        p.set_attr(&slider, "type", "range");
        p.set_value(&slider, "0");
        p.element(body, "span", Some("housing-value"), &[]);
        let gallery = p.element(body, "div", None, &["housing-gallery"]);
        for i in 0..5 {
            p.element(gallery, "img", Some(&format!("housing-image-{i}")), &["housing-image"]);
        }
        question_nav(&p, body);
        p
    }

    /// Household question page, slider at 4.
    pub fn with_household_page() -> Self {
        let p = Self::new();
        let body = p.body_node();
        let slider = p.element(body, "input", Some("householdSlider"), &[]);
        p.set_attr(&slider, "type", "range");
        p.set_value(&slider, "4");
        p.element(body, "span", Some("household-value"), &[]);
        p.element(body, "img", Some("household-main-image"), &[]);
        question_nav(&p, body);
        p
    }
}

fn section(p: &HeadlessPlatform, main: NodeId, tab: TabId, active: bool) -> NodeId {
    let classes: &[&str] = if active {
        &["tab-section", "active"]
    } else {
        &["tab-section"]
    };
    p.element(main, "section", Some(&tab.section_id()), classes)
}

fn question_nav(p: &HeadlessPlatform, body: NodeId) {
    let nav = p.element(body, "div", None, &["question-nav"]);
    p.element(nav, "button", Some("prevButton"), &["prev-question-btn"]);
    p.element(nav, "button", Some("nextButton"), &["next-question-btn"]);
}
