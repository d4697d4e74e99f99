//! Report data types for one user's footprint results.
//!
//! These types define the data model for the report page. They're designed to be:
//!
//! - **Serializable** - JSON import/export via serde with the page's camelCase keys
//! - **Closed** - categories, tabs and emotions are enums, never free-form strings
//! - **Default-able** - `FootprintRecord::default()` is the seed record shown before a retake
//!
//! # Example
//!
//! ```rust
//! use footprint_report::types::{Category, FootprintRecord};
//!
//! let record = FootprintRecord {
//!     earths_required: 2.4,
//!     ..Default::default()
//! };
//! assert_eq!(record.categories.get(Category::Diet).category(), Category::Diet);
//! ```

use serde::{Deserialize, Serialize};

/// One of the four fixed footprint dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Commuting and travel
    Transport,
    /// Home energy use
    Housing,
    /// Food choices
    Diet,
    /// Shopping and waste
    Consumption,
}

impl Category {
    /// All categories in skyline order (left to right).
    pub const ALL: [Category; 4] = [
        Category::Transport,
        Category::Housing,
        Category::Diet,
        Category::Consumption,
    ];

    /// Identifier used in `data-category` attributes.
    pub fn id(self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Housing => "housing",
            Category::Diet => "diet",
            Category::Consumption => "consumption",
        }
    }

    /// Parse a `data-category` identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Transport metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportMetrics {
    /// Weekly CO2 emissions in kg
    pub co2_weekly: f64,
    /// Efficiency versus driving, 0-100
    pub efficiency: f64,
    /// Primary commute mode
    pub mode: String,
}

/// Housing metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingMetrics {
    /// Monthly electricity use in kWh
    pub energy_monthly: f64,
    /// Energy-use share, 0-100 (lower is better)
    pub efficiency: f64,
    /// Home description, e.g. "2BHK, 4 people"
    #[serde(rename = "type")]
    pub home_type: String,
}

/// Diet metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietMetrics {
    /// Litres of water saved per week
    pub water_saved: f64,
    /// Share of locally sourced food, 0-100
    pub local_food: f64,
    /// Diet description
    #[serde(rename = "type")]
    pub diet_type: String,
}

/// Consumption metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionMetrics {
    /// Plastic bags avoided per month
    pub plastic_saved: f64,
    /// Eco shopping score, 0-10
    pub eco_score: f64,
}

/// Per-category metrics. One field per [`Category`], no dynamic keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    /// Transport metrics
    pub transport: TransportMetrics,
    /// Housing metrics
    pub housing: HousingMetrics,
    /// Diet metrics
    pub diet: DietMetrics,
    /// Consumption metrics
    pub consumption: ConsumptionMetrics,
}

/// Borrowed view of the metrics for a single category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CategoryMetrics<'a> {
    /// Transport variant
    Transport(&'a TransportMetrics),
    /// Housing variant
    Housing(&'a HousingMetrics),
    /// Diet variant
    Diet(&'a DietMetrics),
    /// Consumption variant
    Consumption(&'a ConsumptionMetrics),
}

impl CategoryMetrics<'_> {
    /// Category this variant belongs to.
    pub fn category(&self) -> Category {
        match self {
            CategoryMetrics::Transport(_) => Category::Transport,
            CategoryMetrics::Housing(_) => Category::Housing,
            CategoryMetrics::Diet(_) => Category::Diet,
            CategoryMetrics::Consumption(_) => Category::Consumption,
        }
    }
}

impl Categories {
    /// Metrics for one category.
    pub fn get(&self, category: Category) -> CategoryMetrics<'_> {
        match category {
            Category::Transport => CategoryMetrics::Transport(&self.transport),
            Category::Housing => CategoryMetrics::Housing(&self.housing),
            Category::Diet => CategoryMetrics::Diet(&self.diet),
            Category::Consumption => CategoryMetrics::Consumption(&self.consumption),
        }
    }
}

/// Computed footprint for one user.
///
/// Mutated only by the retake action, which regenerates
/// `earths_required` and `comparison_percent`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintRecord {
    /// Overshoot day label, e.g. "28. Jan"
    pub overshoot_date: String,
    /// Planet equivalents needed if everyone lived like this user
    pub earths_required: f64,
    /// Signed percentage against the city baseline
    pub comparison_percent: i32,
    /// Ecological footprint in global hectares
    pub ecological_footprint: f64,
    /// Carbon footprint in tonnes
    pub carbon_footprint: f64,
    /// Carbon share of the footprint, 0-100
    pub carbon_percentage: f64,
    /// Per-category metrics
    pub categories: Categories,
}

impl Default for FootprintRecord {
    fn default() -> Self {
        Self {
            overshoot_date: "28. Jan".into(),
            earths_required: 3.2,
            comparison_percent: 23,
            ecological_footprint: 22.5,
            carbon_footprint: 43.3,
            carbon_percentage: 66.0,
            categories: Categories {
                transport: TransportMetrics {
                    co2_weekly: 12.4,
                    efficiency: 65.0,
                    mode: "Local Train".into(),
                },
                housing: HousingMetrics {
                    energy_monthly: 340.0,
                    efficiency: 25.0,
                    home_type: "2BHK, 4 people".into(),
                },
                diet: DietMetrics {
                    water_saved: 2400.0,
                    local_food: 78.0,
                    diet_type: "Vegetarian".into(),
                },
                consumption: ConsumptionMetrics {
                    plastic_saved: 45.0,
                    eco_score: 8.2,
                },
            },
        }
    }
}

/// Upper bound for `earthsRequired`. One icon is drawn per Earth.
pub const MAX_EARTHS: f64 = 100.0;

impl FootprintRecord {
    /// Check value ranges. Returns a description of the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=MAX_EARTHS).contains(&self.earths_required) {
            return Err(format!(
                "earthsRequired must be within 0-{MAX_EARTHS}, got {}",
                self.earths_required
            ));
        }
        let percentages = [
            ("carbonPercentage", self.carbon_percentage),
            ("transport.efficiency", self.categories.transport.efficiency),
            ("housing.efficiency", self.categories.housing.efficiency),
            ("diet.localFood", self.categories.diet.local_food),
        ];
        for (name, value) in percentages {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!("{name} must be within 0-100, got {value}"));
            }
        }
        let eco = self.categories.consumption.eco_score;
        if !(0.0..=10.0).contains(&eco) {
            return Err(format!("consumption.ecoScore must be within 0-10, got {eco}"));
        }
        Ok(())
    }
}

/// Report tabs. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    /// Headline numbers and skyline
    #[default]
    Summary,
    /// Facts & Figures
    Facts,
    /// How Do You Feel
    Feelings,
    /// Explore Data
    Data,
    /// Solutions
    Solutions,
}

impl TabId {
    /// All tabs in navigation order.
    pub const ALL: [TabId; 5] = [
        TabId::Summary,
        TabId::Facts,
        TabId::Feelings,
        TabId::Data,
        TabId::Solutions,
    ];

    /// Identifier carried by `data-tab`.
    pub fn id(self) -> &'static str {
        match self {
            TabId::Summary => "summary",
            TabId::Facts => "facts",
            TabId::Feelings => "feelings",
            TabId::Data => "data",
            TabId::Solutions => "solutions",
        }
    }

    /// Parse a `data-tab` identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Element id of the tab's section: `{id}-tab`.
    pub fn section_id(self) -> String {
        format!("{}-tab", self.id())
    }

    /// Human label used by the mobile tab selector.
    pub fn label(self) -> &'static str {
        match self {
            TabId::Summary => "Summary",
            TabId::Facts => "Facts & Figures",
            TabId::Feelings => "How Do You Feel",
            TabId::Data => "Explore Data",
            TabId::Solutions => "Solutions",
        }
    }
}

/// Emotion choices on the "How Do You Feel" tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// Inspired
    Inspired,
    /// Concerned
    Concerned,
    /// Motivated
    Motivated,
    /// Curious
    Curious,
    /// Hopeful
    Hopeful,
}

/// Static response shown after an emotion is picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmotionResponse {
    /// Heading
    pub title: &'static str,
    /// Decorative emoji shown next to the heading
    pub emoji: &'static str,
    /// Body text
    pub message: &'static str,
}

impl Emotion {
    /// All emotions in display order.
    pub const ALL: [Emotion; 5] = [
        Emotion::Inspired,
        Emotion::Concerned,
        Emotion::Motivated,
        Emotion::Curious,
        Emotion::Hopeful,
    ];

    /// Identifier carried by `data-emotion`.
    pub fn id(self) -> &'static str {
        match self {
            Emotion::Inspired => "inspired",
            Emotion::Concerned => "concerned",
            Emotion::Motivated => "motivated",
            Emotion::Curious => "curious",
            Emotion::Hopeful => "hopeful",
        }
    }

    /// Parse a `data-emotion` identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.id() == id)
    }

    /// The fixed response for this emotion.
    pub fn response(self) -> EmotionResponse {
        match self {
            Emotion::Inspired => EmotionResponse {
                title: "That's Wonderful!",
                emoji: "🌱",
                message: "Your inspiration is the first step toward positive change. Mumbai needs more environmentally conscious citizens like you. Let's channel this energy into actionable steps that can make a real difference.",
            },
            Emotion::Concerned => EmotionResponse {
                title: "Your Concern Shows You Care",
                emoji: "😟",
                message: "Feeling concerned about our environmental impact is natural and shows your awareness. The good news is that small, consistent actions can create meaningful change. Mumbai's future is brighter with conscious citizens like you.",
            },
            Emotion::Motivated => EmotionResponse {
                title: "Ready to Take Action!",
                emoji: "💪",
                message: "Your motivation is exactly what Mumbai needs! With the right actions, you can significantly reduce your footprint and inspire others. Let's turn this motivation into concrete environmental improvements.",
            },
            Emotion::Curious => EmotionResponse {
                title: "Curiosity Leads to Change",
                emoji: "🤔",
                message: "Your curiosity about environmental impact is the beginning of awareness. Learning more about sustainable living in Mumbai will help you make informed decisions that benefit both you and the city.",
            },
            Emotion::Hopeful => EmotionResponse {
                title: "Hope Drives Progress",
                emoji: "✨",
                message: "Your hopefulness about environmental change is infectious! Mumbai's environmental challenges are solvable with collective action. Your positive attitude combined with practical steps can create real impact.",
            },
        }
    }
}

/// Skyline building for one category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildingSpec {
    /// Category the building represents
    pub category: Category,
    /// Landmark name shown as title and in the modal
    pub name: &'static str,
    /// CSS modifier class
    pub css_type: &'static str,
    /// Width in px
    pub width: f64,
    /// Height at 0 % normalized efficiency
    pub min_height: f64,
    /// Height at 100 % normalized efficiency
    pub max_height: f64,
    /// CSS `left` value
    pub position: &'static str,
    /// Icon drawn on the roof
    pub icon: &'static str,
}

/// The four landmark buildings, in skyline order.
pub const BUILDINGS: [BuildingSpec; 4] = [
    BuildingSpec {
        category: Category::Transport,
        name: "CST Station Complex",
        css_type: "transport-tower",
        width: 80.0,
        min_height: 120.0,
        max_height: 200.0,
        position: "15%",
        icon: "🚊",
    },
    BuildingSpec {
        category: Category::Housing,
        name: "Malabar Hill Residences",
        css_type: "housing-complex",
        width: 100.0,
        min_height: 100.0,
        max_height: 180.0,
        position: "35%",
        icon: "🏠",
    },
    BuildingSpec {
        category: Category::Diet,
        name: "Crawford Market",
        css_type: "food-market",
        width: 90.0,
        min_height: 80.0,
        max_height: 160.0,
        position: "55%",
        icon: "🥬",
    },
    BuildingSpec {
        category: Category::Consumption,
        name: "Linking Road Shops",
        css_type: "shopping-district",
        width: 85.0,
        min_height: 90.0,
        max_height: 170.0,
        position: "75%",
        icon: "🛍️",
    },
];

/// Building spec for a category.
pub fn building_for(category: Category) -> &'static BuildingSpec {
    match category {
        Category::Transport => &BUILDINGS[0],
        Category::Housing => &BUILDINGS[1],
        Category::Diet => &BUILDINGS[2],
        Category::Consumption => &BUILDINGS[3],
    }
}

/// Slice of the land-type pie chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSegment {
    /// Legend label
    pub label: &'static str,
    /// Share in percent
    pub value: f64,
    /// Fill color
    pub color: &'static str,
}

/// Land types making up the footprint. Values sum to 100.
pub const LAND_TYPES: [ChartSegment; 6] = [
    ChartSegment { label: "Built-Up Land", value: 15.0, color: "#87ceeb" },
    ChartSegment { label: "Forest Products", value: 20.0, color: "#90EE90" },
    ChartSegment { label: "Cropland", value: 25.0, color: "#FFD700" },
    ChartSegment { label: "Grazing Land", value: 10.0, color: "#98FB98" },
    ChartSegment { label: "Fishing Grounds", value: 5.0, color: "#A9A9A9" },
    ChartSegment { label: "Carbon Footprint", value: 25.0, color: "#FF6B6B" },
];

/// Bar of the consumption chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConsumptionBar {
    /// Label under the bar
    pub name: &'static str,
    /// Relative value
    pub value: f64,
    /// Icon above the label
    pub icon: &'static str,
    /// Bar color
    pub color: &'static str,
}

/// Consumption breakdown bars.
pub const CONSUMPTION_BARS: [ConsumptionBar; 5] = [
    ConsumptionBar { name: "Food", value: 30.0, icon: "🍽️", color: "#FF6B6B" },
    ConsumptionBar { name: "Shelter", value: 25.0, icon: "🏠", color: "#4ECDC4" },
    ConsumptionBar { name: "Mobility", value: 35.0, icon: "🚗", color: "#45B7D1" },
    ConsumptionBar { name: "Goods", value: 20.0, icon: "📦", color: "#96CEB4" },
    ConsumptionBar { name: "Services", value: 15.0, icon: "💼", color: "#FECA57" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_round_trip_for_closed_sets() {
        for c in Category::ALL {
            assert_eq!(Category::from_id(c.id()), Some(c));
        }
        for t in TabId::ALL {
            assert_eq!(TabId::from_id(t.id()), Some(t));
        }
        for e in Emotion::ALL {
            assert_eq!(Emotion::from_id(e.id()), Some(e));
        }
        assert_eq!(TabId::from_id("settings"), None);
        assert_eq!(Emotion::from_id("angry"), None);
    }

    #[test]
    fn section_ids_follow_naming_convention() {
        assert_eq!(TabId::Summary.section_id(), "summary-tab");
        assert_eq!(TabId::Solutions.section_id(), "solutions-tab");
    }

    #[test]
    fn record_uses_page_json_keys() {
        let json = serde_json::to_value(FootprintRecord::default()).unwrap();
        assert_eq!(json["overshootDate"], "28. Jan");
        assert_eq!(json["earthsRequired"], 3.2);
        assert_eq!(json["categories"]["housing"]["type"], "2BHK, 4 people");
        assert_eq!(json["categories"]["consumption"]["ecoScore"], 8.2);
    }

    #[test]
    fn seed_record_is_valid() {
        assert_eq!(FootprintRecord::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let mut record = FootprintRecord::default();
        record.categories.consumption.eco_score = 11.0;
        assert!(record.validate().unwrap_err().contains("ecoScore"));

        let mut record = FootprintRecord::default();
        record.earths_required = f64::NAN;
        assert!(record.validate().unwrap_err().contains("earthsRequired"));
    }

    #[test]
    fn validate_caps_earths_required() {
        let mut record = FootprintRecord::default();
        record.earths_required = MAX_EARTHS;
        assert_eq!(record.validate(), Ok(()));

        record.earths_required = 1e19;
        assert!(record.validate().unwrap_err().contains("earthsRequired"));
        record.earths_required = f64::INFINITY;
        assert!(record.validate().is_err());
    }

    #[test]
    fn category_lookup_returns_matching_variant() {
        let record = FootprintRecord::default();
        for c in Category::ALL {
            assert_eq!(record.categories.get(c).category(), c);
            assert_eq!(building_for(c).category, c);
        }
    }

    #[test]
    fn land_types_cover_whole_pie() {
        let total: f64 = LAND_TYPES.iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }
}
