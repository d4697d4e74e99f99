//! Configuration file support.
//!
//! Loads an optional `footprint.toml`. Every key has a default matching the
//! live site, so an empty file (or none at all) is valid.
//!
//! ```toml
//! [timing]
//! retake_delay_ms = 1500
//!
//! [retake]
//! earths_min = 1.5
//! earths_max = 3.0
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{FootprintError, Result};
use footprint_report::types::{FootprintRecord, MAX_EARTHS};

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub timing: TimingConfig,
    pub retake: RetakeRanges,
    pub skyline: SkylineConfig,
}

/// Delays and durations, all in milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between consecutive children in the tab reveal animation
    pub reveal_stagger_ms: u32,
    /// Transition duration of each revealed child
    pub reveal_duration_ms: u32,
    /// Simulated recomputation time of a retake
    pub retake_delay_ms: u32,
    /// Delay before the loading overlay is hidden
    pub loading_hide_delay_ms: u32,
    /// Delay before a notification slides in
    pub notification_enter_ms: u32,
    /// Time a notification stays on screen
    pub notification_lifetime_ms: u32,
    /// Slide-out time before the notification is removed
    pub notification_exit_ms: u32,
    /// Duration of the headline counters
    pub counter_duration_ms: u32,
    /// Hero slideshow period
    pub slideshow_interval_ms: u32,
    /// Delay before the hero content fades in
    pub hero_fade_delay_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reveal_stagger_ms: 100,
            reveal_duration_ms: 600,
            retake_delay_ms: 3000,
            loading_hide_delay_ms: 1000,
            notification_enter_ms: 100,
            notification_lifetime_ms: 3000,
            notification_exit_ms: 300,
            counter_duration_ms: 2000,
            slideshow_interval_ms: 5000,
            hero_fade_delay_ms: 500,
        }
    }
}

/// Ranges for the demo values regenerated by a retake. Both are half-open.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RetakeRanges {
    pub earths_min: f64,
    pub earths_max: f64,
    pub comparison_min: i32,
    pub comparison_max: i32,
}

impl Default for RetakeRanges {
    fn default() -> Self {
        Self {
            earths_min: 2.5,
            earths_max: 4.0,
            comparison_min: -20,
            comparison_max: 20,
        }
    }
}

/// Skyline generation settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkylineConfig {
    /// Number of decorative background buildings
    pub background_buildings: usize,
}

impl Default for SkylineConfig {
    fn default() -> Self {
        Self {
            background_buildings: 15,
        }
    }
}

impl ReportConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| FootprintError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific path. Fails on unreadable or invalid files.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FootprintError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load config from a path, falling back to defaults when the file is
    /// missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Reject empty, inverted or unbounded retake ranges.
    pub fn validate(&self) -> Result<()> {
        let r = &self.retake;
        if !r.earths_min.is_finite()
            || !r.earths_max.is_finite()
            || r.earths_min >= r.earths_max
            || r.earths_min < 0.0
            || r.earths_max > MAX_EARTHS
        {
            return Err(FootprintError::InvalidRange {
                name: "retake.earths",
                min: r.earths_min,
                max: r.earths_max,
            });
        }
        if r.comparison_min >= r.comparison_max {
            return Err(FootprintError::InvalidRange {
                name: "retake.comparison",
                min: f64::from(r.comparison_min),
                max: f64::from(r.comparison_max),
            });
        }
        Ok(())
    }
}

/// Load and validate a footprint record from a JSON file.
pub fn load_record(path: &Path) -> Result<FootprintRecord> {
    let content = std::fs::read_to_string(path).map_err(|source| FootprintError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let record = footprint_report::parse_record(&content)?;
    record.validate().map_err(FootprintError::InvalidRecord)?;
    Ok(record)
}
