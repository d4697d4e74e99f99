//! Mumbai skyline: one landmark per category, lit windows, decorative
//! background buildings, the air-quality layer and the detail modal.

use rand::Rng;

use footprint_report::render_building_details;
use footprint_report::types::{BUILDINGS, BuildingSpec, Categories, Category};

use super::ReportView;
use crate::metrics::{AirQuality, atmosphere_score, building_height_for};
use crate::platform::{EventKind, Platform};

const WINDOW_ROW_PX: f64 = 25.0;
const WINDOW_COL_PX: f64 = 20.0;
const WINDOW_LIT_PROBABILITY: f64 = 0.7;

const MODAL_CLASSES: &str = "modal fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center p-4";
const MODAL_CONTENT_CLASSES: &str = "modal-content bg-white rounded-2xl p-8 max-w-md mx-auto my-20";
const CLOSE_BUTTON_CLASSES: &str = "close-modal bg-gray-500 text-white px-4 py-2 rounded-lg flex-1";

fn add_classes<P: Platform>(platform: &P, node: &P::Node, classes: &str) {
    for class in classes.split_whitespace() {
        platform.add_class(node, class);
    }
}

impl<P: Platform + 'static> ReportView<P> {
    /// Rebuild `#skylineBuildings` from the current record.
    pub fn render_skyline(&self) {
        let p = self.platform();
        let Some(container) = p.by_id("skylineBuildings") else {
            return;
        };
        p.clear(&container);

        let categories = self.inner.state.borrow().record.categories.clone();
        for spec in &BUILDINGS {
            if let Some(building) = self.landmark(spec, &categories) {
                p.append(&container, &building);
            }
        }
        self.add_background_buildings(&container);
        self.update_atmosphere(&categories);
        tracing::debug!("skyline rendered");
    }

    fn landmark(&self, spec: &BuildingSpec, categories: &Categories) -> Option<P::Node> {
        let p = self.platform();
        let height = building_height_for(categories, spec);
        let building = p.create("div")?;

        p.add_class(&building, "category-building");
        p.add_class(&building, spec.css_type);
        p.set_style(&building, "width", &format!("{}px", spec.width));
        p.set_style(&building, "height", &format!("{height:.1}px"));
        p.set_style(&building, "left", spec.position);
        p.set_attr(&building, "title", spec.name);
        p.set_attr(&building, "data-category", spec.category.id());

        if let Some(icon) = p.create("div") {
            p.add_class(&icon, "building-icon");
            p.set_text(&icon, spec.icon);
            for (property, value) in [
                ("position", "absolute"),
                ("top", "10px"),
                ("left", "50%"),
                ("transform", "translateX(-50%)"),
                ("font-size", "20px"),
                ("z-index", "10"),
            ] {
                p.set_style(&icon, property, value);
            }
            p.append(&building, &icon);
        }

        self.add_windows(&building, spec.width, height);

        let category = spec.category;
        self.bind(&building, EventKind::Click, move |view, _| {
            view.open_building(category)
        });
        Some(building)
    }

    fn add_windows(&self, building: &P::Node, width: f64, height: f64) {
        let p = self.platform();
        let rows = (height / WINDOW_ROW_PX).floor() as usize;
        let cols = (width / WINDOW_COL_PX).floor() as usize;
        if rows < 2 || cols == 0 {
            return;
        }

        let lit: Vec<bool> = {
            let mut state = self.inner.state.borrow_mut();
            (0..(rows - 1) * cols)
                .map(|_| state.rng.gen_bool(WINDOW_LIT_PROBABILITY))
                .collect()
        };

        for row in 1..rows {
            for col in 0..cols {
                if !lit[(row - 1) * cols + col] {
                    continue;
                }
                let Some(window) = p.create("div") else {
                    continue;
                };
                p.add_class(&window, "building-window");
                p.set_style(&window, "width", "8px");
                p.set_style(&window, "height", "12px");
                p.set_style(&window, "left", &format!("{}px", 5.0 + col as f64 * WINDOW_COL_PX));
                p.set_style(
                    &window,
                    "top",
                    &format!("{:.1}px", height - row as f64 * WINDOW_ROW_PX),
                );
                p.append(building, &window);
            }
        }
    }

    fn add_background_buildings(&self, container: &P::Node) {
        let p = self.platform();
        let count = self.config().skyline.background_buildings;

        for i in 0..count {
            let (width, height) = {
                let mut state = self.inner.state.borrow_mut();
                (
                    20.0 + state.rng.gen_range(0.0..1.0) * 30.0,
                    40.0 + state.rng.gen_range(0.0..1.0) * 80.0,
                )
            };
            let Some(building) = p.create("div") else {
                continue;
            };
            let left = i as f64 / count as f64 * 100.0;

            p.add_class(&building, "background-building");
            for (property, value) in [
                ("position", "absolute".to_string()),
                ("bottom", "0".to_string()),
                ("width", format!("{width:.1}px")),
                ("height", format!("{height:.1}px")),
                ("left", format!("{left:.2}%")),
                ("background", "linear-gradient(to top, #455a64, #607d8b)".to_string()),
                ("z-index", "1".to_string()),
                ("opacity", "0.6".to_string()),
            ] {
                p.set_style(&building, property, &value);
            }
            p.append(container, &building);
        }
    }

    fn update_atmosphere(&self, categories: &Categories) {
        let p = self.platform();
        let quality = AirQuality::from_score(atmosphere_score(categories));

        if let Some(layer) = p.by_id("atmosphereLayer") {
            for band in AirQuality::ALL {
                p.remove_class(&layer, band.css_class());
            }
            p.add_class(&layer, quality.css_class());
        }
        if let Some(indicator) = p.by_id("timeIndicator") {
            p.set_text(&indicator, quality.label());
        }
    }

    /// Open the detail modal for a landmark.
    pub fn open_building(&self, category: Category) {
        let p = self.platform();
        let Some(body) = p.body() else {
            return;
        };
        let (Some(modal), Some(content), Some(details), Some(actions), Some(close)) = (
            p.create("div"),
            p.create("div"),
            p.create("div"),
            p.create("div"),
            p.create("button"),
        ) else {
            return;
        };

        add_classes(&**p, &modal, MODAL_CLASSES);
        p.set_style(&modal, "animation", "fadeIn 0.3s ease-out");
        p.set_attr(&modal, "data-category", category.id());

        add_classes(&**p, &content, MODAL_CONTENT_CLASSES);
        let html = render_building_details(category, &self.inner.state.borrow().record);
        p.set_inner_html(&details, &html);

        add_classes(&**p, &actions, "modal-actions mt-6 flex gap-3");
        add_classes(&**p, &close, CLOSE_BUTTON_CLASSES);
        p.set_text(&close, "Close");

        p.append(&actions, &close);
        p.append(&content, &details);
        p.append(&content, &actions);
        p.append(&modal, &content);

        let target = modal.clone();
        self.bind(&close, EventKind::Click, move |view, _| {
            view.platform().remove(&target)
        });
        let target = modal.clone();
        self.bind(&modal, EventKind::Click, move |view, info| {
            if info.direct {
                view.platform().remove(&target);
            }
        });

        p.append(&body, &modal);
        tracing::debug!("opened details for {category}");
    }
}
