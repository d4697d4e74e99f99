//! Headline numbers, fact slots, earth icons, charts, counters and the
//! loading overlay.

use footprint_report::format::{format_fixed, format_number, format_thousands};
use footprint_report::types::FootprintRecord;
use footprint_report::{render_consumption_chart, render_land_chart};

use super::ReportView;
use crate::counter::{CounterAnimation, animate_counter};
use crate::metrics::earth_icons;
use crate::platform::Platform;

/// `"23% higher"`, `"7% lower"`.
pub fn comparison_label(percent: i32) -> String {
    if percent < 0 {
        format!("{}% lower", percent.unsigned_abs())
    } else {
        format!("{percent}% higher")
    }
}

/// Write the record into its text slots. Absent slots are skipped.
pub fn render_summary<P: Platform>(platform: &P, record: &FootprintRecord) {
    let c = &record.categories;
    let slots = [
        ("overshootDate", record.overshoot_date.clone()),
        ("earthsNumber", format_fixed(record.earths_required, 1)),
        ("comparisonPercent", comparison_label(record.comparison_percent)),
        ("ecologicalFootprint", format_number(record.ecological_footprint)),
        ("carbonFootprint", format_number(record.carbon_footprint)),
        ("carbonPercentage", format_number(record.carbon_percentage)),
        ("transportCO2", format_number(c.transport.co2_weekly)),
        ("energyUsage", format_number(c.housing.energy_monthly)),
        ("waterSaved", format_thousands(c.diet.water_saved)),
        ("localFood", format_number(c.diet.local_food)),
        ("plasticSaved", format_number(c.consumption.plastic_saved)),
    ];

    for (id, text) in slots {
        if let Some(node) = platform.by_id(id) {
            platform.set_text(&node, &text);
        }
    }
}

/// Replace the contents of `#earthIcons` with one icon per planet.
pub fn render_earth_icons<P: Platform>(platform: &P, earths: f64) {
    let Some(container) = platform.by_id("earthIcons") else {
        return;
    };
    platform.clear(&container);

    for icon in earth_icons(earths) {
        let Some(node) = platform.create("div") else {
            continue;
        };
        platform.add_class(&node, "earth-icon");
        if let Some(gradient) = icon.gradient() {
            platform.add_class(&node, "partial");
            platform.set_style(&node, "background", &gradient);
        }
        platform.set_style(
            &node,
            "animation-delay",
            &format!("{:.1}s", icon.animation_delay()),
        );
        platform.append(&container, &node);
    }
}

impl<P: Platform + 'static> ReportView<P> {
    pub fn render_summary(&self) {
        let record = self.record();
        render_summary(&**self.platform(), &record);
        tracing::debug!("summary rendered");
    }

    pub fn render_earth_icons(&self) {
        let earths = self.inner.state.borrow().record.earths_required;
        render_earth_icons(&**self.platform(), earths);
    }

    pub(super) fn render_charts(&self) {
        let p = self.platform();
        if let Some(chart) = p.by_id("landTypeChart") {
            p.set_inner_html(&chart, &render_land_chart());
        }
        if let Some(chart) = p.by_id("consumptionChart") {
            p.set_inner_html(&chart, &render_consumption_chart());
        }
    }

    /// Count the headline numbers up from zero.
    pub fn start_counters(&self) {
        let p = self.platform();
        let record = self.record();
        let duration = self.config().timing.counter_duration_ms;
        let counters = [
            ("earthsNumber", record.earths_required, 1),
            ("ecologicalFootprint", record.ecological_footprint, 1),
            ("carbonFootprint", record.carbon_footprint, 1),
            ("carbonPercentage", record.carbon_percentage, 0),
        ];

        for (id, target, decimals) in counters {
            if let Some(node) = p.by_id(id) {
                let animation = CounterAnimation::new(0.0, target, duration, decimals, p.now());
                animate_counter(p, node, animation);
            }
        }
    }

    pub(super) fn show_loading(&self) {
        let p = self.platform();
        if let Some(overlay) = p.by_id("loadingOverlay") {
            p.remove_class(&overlay, "hidden");
        }
    }

    pub(super) fn hide_loading(&self) {
        let p = self.platform();
        if p.by_id("loadingOverlay").is_none() {
            return;
        }
        let delay = self.config().timing.loading_hide_delay_ms;
        self.schedule(delay, |view| {
            let p = view.platform();
            // A retake started in the meantime owns the overlay again.
            if view.is_loading() {
                return;
            }
            if let Some(overlay) = p.by_id("loadingOverlay") {
                p.add_class(&overlay, "hidden");
            }
        });
    }
}
