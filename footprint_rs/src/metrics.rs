//! Derived values: normalized efficiency, building heights, air quality and
//! the earth-icon plan. Pure functions, no platform access.

use footprint_report::types::{BuildingSpec, Categories, Category, CategoryMetrics, MAX_EARTHS};
use serde::Serialize;

/// Category metric mapped onto a 0-100 "higher is better" scale.
///
/// Housing is inverted: a lower energy share means a taller building.
pub fn normalized_efficiency(categories: &Categories, category: Category) -> f64 {
    match categories.get(category) {
        CategoryMetrics::Transport(t) => t.efficiency,
        CategoryMetrics::Housing(h) => 100.0 - h.efficiency,
        CategoryMetrics::Diet(d) => d.local_food,
        CategoryMetrics::Consumption(c) => c.eco_score * 10.0,
    }
}

/// Height in px of a building whose category scores `normalized`.
pub fn building_height(normalized: f64, min_height: f64, max_height: f64) -> f64 {
    min_height + (max_height - min_height) * (normalized / 100.0)
}

/// Height of the landmark building for `spec.category`.
pub fn building_height_for(categories: &Categories, spec: &BuildingSpec) -> f64 {
    building_height(
        normalized_efficiency(categories, spec.category),
        spec.min_height,
        spec.max_height,
    )
}

/// Unweighted mean of the four normalized efficiencies.
pub fn atmosphere_score(categories: &Categories) -> f64 {
    let total: f64 = Category::ALL
        .iter()
        .map(|c| normalized_efficiency(categories, *c))
        .sum();
    total / Category::ALL.len() as f64
}

/// Air-quality band shown over the skyline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AirQuality {
    Clean,
    Moderate,
    Poor,
}

impl AirQuality {
    pub const ALL: [AirQuality; 3] = [AirQuality::Clean, AirQuality::Moderate, AirQuality::Poor];

    /// `>= 80` clean, `>= 60` moderate, otherwise poor.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            AirQuality::Clean
        } else if score >= 60.0 {
            AirQuality::Moderate
        } else {
            AirQuality::Poor
        }
    }

    /// Class put on the atmosphere layer.
    pub fn css_class(self) -> &'static str {
        match self {
            AirQuality::Clean => "clean",
            AirQuality::Moderate => "moderate",
            AirQuality::Poor => "polluted",
        }
    }

    /// Time-of-day indicator text.
    pub fn label(self) -> &'static str {
        match self {
            AirQuality::Clean => "🌅 Morning Air Quality: Good",
            AirQuality::Moderate => "⛅ Afternoon Air Quality: Moderate",
            AirQuality::Poor => "🌫️ Evening Air Quality: Poor",
        }
    }
}

/// One icon in the "earths required" row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EarthIcon {
    pub index: usize,
    /// Fill fraction of a partial icon, `None` for a full one.
    pub fill: Option<f64>,
}

impl EarthIcon {
    /// Staggered pop-in delay, in seconds.
    pub fn animation_delay(&self) -> f64 {
        self.index as f64 * 0.2
    }

    /// Background gradient splitting the icon at the fill fraction.
    pub fn gradient(&self) -> Option<String> {
        self.fill.map(|f| {
            let pct = f * 100.0;
            format!(
                "linear-gradient(135deg, #4ECDC4 0%, #4ECDC4 {pct}%, #ddd {pct}%, #ddd 100%)"
            )
        })
    }
}

/// `ceil(earths)` icons; the last one is partial when `earths` has a
/// fractional part. Zero, negative and non-finite inputs give no icons;
/// values above [`MAX_EARTHS`] are drawn as `MAX_EARTHS`.
pub fn earth_icons(earths: f64) -> Vec<EarthIcon> {
    if !earths.is_finite() || earths <= 0.0 {
        return Vec::new();
    }
    let earths = earths.min(MAX_EARTHS);
    let total = earths.ceil() as usize;
    let partial = earths % 1.0;
    (0..total)
        .map(|index| EarthIcon {
            index,
            fill: (index + 1 == total && partial > 0.0).then_some(partial),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint_report::types::{BUILDINGS, FootprintRecord};

    #[test]
    fn seed_record_normalization() {
        let c = FootprintRecord::default().categories;
        assert_eq!(normalized_efficiency(&c, Category::Transport), 65.0);
        assert_eq!(normalized_efficiency(&c, Category::Housing), 75.0);
        assert_eq!(normalized_efficiency(&c, Category::Diet), 78.0);
        assert_eq!(normalized_efficiency(&c, Category::Consumption), 82.0);
        assert_eq!(atmosphere_score(&c), 75.0);
        assert_eq!(AirQuality::from_score(atmosphere_score(&c)), AirQuality::Moderate);
    }

    #[test]
    fn housing_is_inverted() {
        let mut c = FootprintRecord::default().categories;
        c.housing.efficiency = 0.0;
        let tall = building_height_for(&c, &BUILDINGS[1]);
        c.housing.efficiency = 100.0;
        let short = building_height_for(&c, &BUILDINGS[1]);
        assert_eq!(tall, 180.0);
        assert_eq!(short, 100.0);
    }

    #[test]
    fn building_height_interpolates() {
        assert_eq!(building_height(0.0, 120.0, 200.0), 120.0);
        assert_eq!(building_height(50.0, 120.0, 200.0), 160.0);
        assert_eq!(building_height(100.0, 120.0, 200.0), 200.0);
    }

    #[test]
    fn air_quality_bands_and_boundaries() {
        assert_eq!(AirQuality::from_score(85.0), AirQuality::Clean);
        assert_eq!(AirQuality::from_score(80.0), AirQuality::Clean);
        assert_eq!(AirQuality::from_score(79.99), AirQuality::Moderate);
        assert_eq!(AirQuality::from_score(70.0), AirQuality::Moderate);
        assert_eq!(AirQuality::from_score(60.0), AirQuality::Moderate);
        assert_eq!(AirQuality::from_score(59.99), AirQuality::Poor);
        assert_eq!(AirQuality::from_score(40.0), AirQuality::Poor);
    }

    #[test]
    fn earth_icons_count_and_partial() {
        for (earths, count, fill) in [
            (3.2_f64, 4, Some(3.2_f64 % 1.0)),
            (3.0, 3, None),
            (0.4, 1, Some(0.4)),
            (1.0, 1, None),
        ] {
            let icons = earth_icons(earths);
            assert_eq!(icons.len(), count, "earths = {earths}");
            assert_eq!(icons.last().and_then(|i| i.fill), fill, "earths = {earths}");
            assert!(icons[..count - 1].iter().all(|i| i.fill.is_none()));
        }
    }

    #[test]
    fn earth_icons_are_capped() {
        let icons = earth_icons(1e19);
        assert_eq!(icons.len(), MAX_EARTHS as usize);
        assert!(icons.iter().all(|i| i.fill.is_none()));
        assert_eq!(earth_icons(f64::MAX).len(), MAX_EARTHS as usize);
    }

    #[test]
    fn earth_icons_ignore_non_positive_and_nan() {
        assert!(earth_icons(0.0).is_empty());
        assert!(earth_icons(-2.5).is_empty());
        assert!(earth_icons(f64::NAN).is_empty());
        assert!(earth_icons(f64::INFINITY).is_empty());
    }

    #[test]
    fn partial_gradient_splits_at_fill() {
        let icon = EarthIcon {
            index: 2,
            fill: Some(0.5),
        };
        assert_eq!(
            icon.gradient().unwrap(),
            "linear-gradient(135deg, #4ECDC4 0%, #4ECDC4 50%, #ddd 50%, #ddd 100%)"
        );
        assert!((icon.animation_delay() - 0.4).abs() < 1e-9);
    }
}
