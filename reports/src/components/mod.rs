//! Leptos fragments rendered to HTML strings for the live page.
//!
//! The report page markup itself ships with the site. These components
//! produce the pieces the page fills in at runtime: the body of the
//! building detail modal and the two data-tab charts.
//!
//! # Usage
//!
//! Components are typically used via the `render_*` functions in the crate
//! root, but can be composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use footprint_report::components::LandTypeChart;
//!
//! view! { <LandTypeChart /> }
//! ```

mod charts;
mod modal;

pub use charts::{ConsumptionChart, LandTypeChart, PieSlice, bar_height, pie_slices};
pub use modal::{BuildingDetails, DetailRow, detail_rows};
