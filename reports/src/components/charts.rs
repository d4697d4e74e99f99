//! Data tab charts - SVG pie and bar charts

use leptos::prelude::*;

use crate::types::{CONSUMPTION_BARS, ChartSegment, LAND_TYPES};

/// Max bar height in px for the consumption chart.
const BAR_MAX_HEIGHT: f64 = 150.0;
/// Value that maps to `BAR_MAX_HEIGHT`.
const BAR_FULL_VALUE: f64 = 40.0;

/// Bars grow slightly under the pointer.
const BAR_HOVER_CSS: &str = ".consumption-bar { cursor: pointer; transition: transform 0.3s ease; } .consumption-bar:hover { transform: scale(1.1); }";

/// Pie slice ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    /// SVG path data
    pub path: String,
    /// Fill color
    pub color: &'static str,
    /// Legend label
    pub label: &'static str,
}

/// Build pie slice paths, starting at 3 o'clock and going clockwise.
pub fn pie_slices(segments: &[ChartSegment], cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let mut angle = 0.0_f64;
    segments
        .iter()
        .map(|segment| {
            let sweep = (segment.value / 100.0) * std::f64::consts::TAU;
            let (x1, y1) = (cx + radius * angle.cos(), cy + radius * angle.sin());
            let end = angle + sweep;
            let (x2, y2) = (cx + radius * end.cos(), cy + radius * end.sin());
            let large_arc = if sweep > std::f64::consts::PI { 1 } else { 0 };
            angle = end;

            PieSlice {
                path: format!(
                    "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
                ),
                color: segment.color,
                label: segment.label,
            }
        })
        .collect()
}

/// Bar height in px for a consumption value.
pub fn bar_height(value: f64) -> f64 {
    (value / BAR_FULL_VALUE) * BAR_MAX_HEIGHT
}

/// Land-type breakdown as an SVG pie.
#[component]
pub fn LandTypeChart() -> impl IntoView {
    let slices = pie_slices(&LAND_TYPES, 130.0, 130.0, 120.0);

    view! {
        <svg viewBox="0 0 260 260" width="260" height="260" class="land-chart">
            {slices.into_iter().map(|slice| {
                view! {
                    <path d=slice.path fill=slice.color stroke="#fff" stroke-width="2" data-label=slice.label></path>
                }
            }).collect::<Vec<_>>()}
        </svg>
    }
}

/// Consumption breakdown as pseudo-3D bars.
#[component]
pub fn ConsumptionChart() -> impl IntoView {
    view! {
        <style>{BAR_HOVER_CSS}</style>
        {CONSUMPTION_BARS.iter().map(|bar| {
            let style = format!(
                "width: 40px; height: {:.1}px; background: linear-gradient(45deg, {}, {}dd); border-radius: 4px 4px 0 0; margin-bottom: 8px; transform: perspective(100px) rotateX(10deg); box-shadow: 0 4px 8px rgba(0,0,0,0.2);",
                bar_height(bar.value),
                bar.color,
                bar.color,
            );
            view! {
                <div class="consumption-bar">
                    <div class="bar-3d" style=style></div>
                    <div class="bar-icon">{bar.icon}</div>
                    <div class="bar-label">{bar.name}</div>
                </div>
            }
        }).collect::<Vec<_>>()}
    }
}
