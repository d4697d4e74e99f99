//! # footprint-report
//!
//! Data model and Leptos SSR fragments for the EcoFootprint report page.
//!
//! The report page is driven from Rust (see the `footprint` crate). This
//! crate holds what does not depend on a rendering surface:
//!
//! - [`types`] - the footprint record, closed category/tab/emotion sets and
//!   the fixed chart and skyline tables
//! - [`components`] - Leptos components for the modal body and charts
//! - [`format`] - number formatting matching the page's display rules
//!
//! ## Quick Start
//!
//! ```rust
//! use footprint_report::{render_building_details, types::{Category, FootprintRecord}};
//!
//! let record = FootprintRecord::default();
//! let html = render_building_details(Category::Housing, &record);
//! assert!(html.contains("Malabar Hill Residences"));
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! Fragments are rendered with Leptos 0.8's `RenderHtml` trait. No reactive
//! runtime or hydration is involved; the output is plain HTML assigned to an
//! element's `innerHTML`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod format;
pub mod types;

use components::{BuildingDetails, ConsumptionChart, LandTypeChart};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{Category, FootprintRecord, building_for};

/// Render the header and detail rows of the building modal for `category`.
pub fn render_building_details(category: Category, record: &FootprintRecord) -> String {
    let building = *building_for(category);
    let categories = record.categories.clone();
    view! { <BuildingDetails building=building categories=categories /> }.to_html()
}

/// Render the land-type pie chart as inline SVG.
pub fn render_land_chart() -> String {
    view! { <LandTypeChart /> }.to_html()
}

/// Render the consumption bar chart.
pub fn render_consumption_chart() -> String {
    view! { <ConsumptionChart /> }.to_html()
}

/// Parse a record from the page's JSON shape.
pub fn parse_record(json: &str) -> Result<FootprintRecord, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_transport_details() {
        let html = render_building_details(Category::Transport, &FootprintRecord::default());

        assert!(html.contains("CST Station Complex"));
        assert!(html.contains("transport Impact Details"));
        assert!(html.contains("12.4 kg"));
        assert!(html.contains("65% better"));
        assert!(html.contains("Local Train"));
    }

    #[test]
    fn renders_diet_water_with_separators() {
        let html = render_building_details(Category::Diet, &FootprintRecord::default());

        assert!(html.contains("Crawford Market"));
        assert!(html.contains("2,400 liters"));
        assert!(html.contains("78%"));
    }

    #[test]
    fn consumption_details_have_two_rows() {
        let html = render_building_details(Category::Consumption, &FootprintRecord::default());

        assert_eq!(html.matches("detail-item").count(), 2);
        assert!(html.contains("45/month"));
        assert!(html.contains("8.2/10"));
    }

    #[test]
    fn land_chart_is_svg_with_all_slices() {
        let html = render_land_chart();

        assert!(html.contains("<svg"));
        assert_eq!(html.matches("<path").count(), types::LAND_TYPES.len());
        assert!(html.contains("#FF6B6B"));
    }

    #[test]
    fn consumption_chart_has_one_bar_per_category() {
        let html = render_consumption_chart();

        assert_eq!(html.matches("class=\"consumption-bar\"").count(), 5);
        assert!(html.contains("Mobility"));
        assert!(html.contains("height: 112.5px"));
    }

    #[test]
    fn parses_page_json() {
        let json = serde_json::to_string(&FootprintRecord::default()).unwrap();
        let record = parse_record(&json).unwrap();
        assert_eq!(record, FootprintRecord::default());
    }
}
