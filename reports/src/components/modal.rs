//! Building detail modal body

use leptos::prelude::*;

use crate::format::{format_number, format_thousands};
use crate::types::{BuildingSpec, Categories, CategoryMetrics};

/// One labelled value in the detail list.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailRow {
    /// Label, e.g. "Monthly Energy:"
    pub label: &'static str,
    /// Rendered value with unit
    pub value: String,
    /// Accent class for the value
    pub class: &'static str,
}

/// Category-specific rows for the building modal.
pub fn detail_rows(metrics: CategoryMetrics<'_>) -> Vec<DetailRow> {
    const BLUE: &str = "text-blue-600";
    const GREEN: &str = "text-green-600";
    const PLAIN: &str = "";

    match metrics {
        CategoryMetrics::Transport(t) => vec![
            DetailRow {
                label: "Weekly CO₂ Emissions:",
                value: format!("{} kg", format_number(t.co2_weekly)),
                class: BLUE,
            },
            DetailRow {
                label: "Efficiency vs Cars:",
                value: format!("{}% better", format_number(t.efficiency)),
                class: GREEN,
            },
            DetailRow {
                label: "Primary Mode:",
                value: t.mode.clone(),
                class: PLAIN,
            },
        ],
        CategoryMetrics::Housing(h) => vec![
            DetailRow {
                label: "Monthly Energy:",
                value: format!("{} kWh", format_number(h.energy_monthly)),
                class: GREEN,
            },
            DetailRow {
                label: "Per-person Efficiency:",
                value: format!("{}% better", format_number(h.efficiency)),
                class: GREEN,
            },
            DetailRow {
                label: "Home Type:",
                value: h.home_type.clone(),
                class: PLAIN,
            },
        ],
        CategoryMetrics::Diet(d) => vec![
            DetailRow {
                label: "Water Saved Weekly:",
                value: format!("{} liters", format_thousands(d.water_saved)),
                class: BLUE,
            },
            DetailRow {
                label: "Local Food %:",
                value: format!("{}%", format_number(d.local_food)),
                class: GREEN,
            },
            DetailRow {
                label: "Diet Type:",
                value: d.diet_type.clone(),
                class: PLAIN,
            },
        ],
        CategoryMetrics::Consumption(c) => vec![
            DetailRow {
                label: "Plastic Bags Avoided:",
                value: format!("{}/month", format_number(c.plastic_saved)),
                class: GREEN,
            },
            DetailRow {
                label: "Eco Shopping Score:",
                value: format!("{}/10", format_number(c.eco_score)),
                class: GREEN,
            },
        ],
    }
}

/// Header and detail list shown inside the building modal.
///
/// The close button is not part of this fragment; the live page creates it
/// so it can attach a listener.
#[component]
pub fn BuildingDetails(building: BuildingSpec, categories: Categories) -> impl IntoView {
    let category = building.category;
    let rows = detail_rows(categories.get(category));

    view! {
        <div class="text-center mb-6">
            <div class="text-4xl mb-3">{building.icon}</div>
            <h3 class="text-2xl font-bold text-mumbai-dark">{building.name}</h3>
            <p class="text-gray-600 capitalize">{format!("{} Impact Details", category.id())}</p>
        </div>
        <div class="category-details">
            {rows.into_iter().map(|row| {
                view! {
                    <div class="detail-item mb-4">
                        <span class="font-semibold">{row.label}</span>
                        " "
                        <span class=row.class>{row.value}</span>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
