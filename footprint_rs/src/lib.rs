//! # footprint
//!
//! **EcoFootprint Mumbai** - the behaviour behind the report page and the
//! questionnaire pages around it.
//!
//! A user's computed [`FootprintRecord`] is rendered into a tabbed report:
//! headline numbers, a row of "earths required" icons, a Mumbai skyline whose
//! landmark heights track each category, an emotion panel, data charts and
//! share/retake actions. The landing page runs a background slideshow; the
//! housing and household pages are single sliders.
//!
//! ## Features
//!
//! - **Report view** - tab state machine, summary slots, skyline, modal,
//!   counters, notifications ([`ReportView`])
//! - **Hero page** - pausable slideshow with an owned repeating timer
//! - **Slider pages** - housing type and household size
//! - **Headless platform** - in-memory DOM with a virtual clock, for tests
//!   and the `footprint` CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use footprint::headless::HeadlessPlatform;
//! use footprint::{ReportConfig, ReportView};
//! use footprint_report::types::{Emotion, FootprintRecord};
//!
//! let platform = Rc::new(HeadlessPlatform::with_report_page());
//! let view = ReportView::mount_seeded(
//!     platform.clone(),
//!     FootprintRecord::default(),
//!     ReportConfig::default(),
//!     42,
//! );
//! view.select_emotion(Emotion::Curious);
//! platform.settle();
//!
//! assert_eq!(platform.text_of("responseTitle").as_deref(), Some("Curiosity Leads to Change"));
//! assert_eq!(platform.text_of("earthsNumber").as_deref(), Some("3.2"));
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! footprint score                       # derived metrics for the seed record
//! footprint render --tab data --json    # mount headless, print a snapshot
//! footprint household 10                # slider label and image
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Report configuration loaded from TOML.
pub mod config;

/// Count-up animation for headline numbers.
pub mod counter;

/// Error types for config and record loading.
pub mod error;

/// Pure derived values: normalized efficiencies, building heights,
/// air-quality band, earth icon plan.
pub mod metrics;

/// Platform abstraction over the DOM and browser services.
///
/// # Key Types
///
/// - [`Platform`](platform::Platform) - element lookup, mutation, timers
/// - [`EventKind`](platform::EventKind) - events the pages listen for
/// - [`ShareData`](platform::ShareData) - native share payload
pub mod platform;

/// Demo regeneration of the record on retake.
pub mod retake;

/// Owned repeating timer used by the slideshow.
pub mod timer;

// ============================================================================
// Pages
// ============================================================================

/// Landing hero and slider question pages.
pub mod pages;

/// The report page controller.
pub mod view;

// ============================================================================
// Drivers
// ============================================================================

/// `footprint` command-line interface.
pub mod cli;

/// In-memory platform with a virtual clock.
pub mod headless;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::{ReportConfig, RetakeRanges, SkylineConfig, TimingConfig};
pub use error::{FootprintError, Result};
pub use metrics::AirQuality;
pub use pages::{HeroPage, HouseholdPage, HousingPage, Page};
pub use platform::Platform;
pub use view::{NotificationKind, ReportView};

pub use footprint_report::types::FootprintRecord;
