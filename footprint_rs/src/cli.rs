//! `footprint` command-line interface.
//!
//! Every command runs the real page code on a [`HeadlessPlatform`] and
//! prints what the page would show:
//!
//! ```text
//! footprint score                 derived metrics of the record
//! footprint render [opts]         mount the report, apply actions, snapshot
//! footprint housing <index>       housing slider label
//! footprint household <size>      household slider label and image
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;

use footprint_report::types::{BUILDINGS, Category, Emotion, FootprintRecord, TabId};

use crate::config::{ReportConfig, load_record};
use crate::headless::HeadlessPlatform;
use crate::metrics::{
    AirQuality, EarthIcon, atmosphere_score, building_height_for, earth_icons, normalized_efficiency,
};
use crate::pages::{HouseholdPage, HousingPage};
use crate::platform::Platform;
use crate::view::{ReportView, comparison_label};

/// Text slots captured in a render snapshot, in page order.
/// Picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "footprint.toml";

const SNAPSHOT_SLOTS: [&str; 11] = [
    "overshootDate",
    "earthsNumber",
    "comparisonPercent",
    "ecologicalFootprint",
    "carbonFootprint",
    "carbonPercentage",
    "transportCO2",
    "energyUsage",
    "waterSaved",
    "localFood",
    "plasticSaved",
];

#[derive(Parser, Debug)]
#[command(name = "footprint")]
#[command(about = "EcoFootprint report pages, run headless")]
#[command(version)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Report configuration (TOML). Defaults to ./footprint.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Footprint record (JSON). The built-in sample record is used when absent.
    #[arg(long, global = true)]
    pub record: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print normalized efficiencies, building heights and the air-quality band
    Score {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mount the report headless, apply actions and print a snapshot
    Render(RenderArgs),
    /// Resolve a housing slider position (0-4)
    Housing {
        index: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a household slider value (1-10)
    Household {
        size: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(ClapArgs, Debug, Default)]
pub struct RenderArgs {
    /// Tab to switch to (summary, facts, feelings, data, solutions)
    #[arg(long)]
    pub tab: Option<String>,

    /// Emotion to select (inspired, concerned, motivated, curious, hopeful)
    #[arg(long)]
    pub emotion: Option<String>,

    /// Open the skyline modal for a category
    #[arg(long)]
    pub open: Option<String>,

    /// Retake the quiz, answering the confirmation with yes
    #[arg(long)]
    pub retake: bool,

    /// Seed for skyline windows and retake values
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Viewport width in px
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Per-category score line.
#[derive(Debug, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub normalized: f64,
    pub building: &'static str,
    pub height: f64,
}

#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub categories: Vec<CategoryScore>,
    pub atmosphere_score: f64,
    pub air_quality: AirQuality,
    pub earths_required: f64,
    pub earth_icons: Vec<EarthIcon>,
    pub comparison: String,
}

impl ScoreReport {
    pub fn from_record(record: &FootprintRecord) -> Self {
        let c = &record.categories;
        let categories = BUILDINGS
            .iter()
            .map(|spec| CategoryScore {
                category: spec.category,
                normalized: normalized_efficiency(c, spec.category),
                building: spec.name,
                height: building_height_for(c, spec),
            })
            .collect();
        let score = atmosphere_score(c);
        Self {
            categories,
            atmosphere_score: score,
            air_quality: AirQuality::from_score(score),
            earths_required: record.earths_required,
            earth_icons: earth_icons(record.earths_required),
            comparison: comparison_label(record.comparison_percent),
        }
    }
}

/// What the report shows after a headless run.
#[derive(Debug, Serialize)]
pub struct RenderSnapshot {
    pub tab: TabId,
    pub slots: BTreeMap<&'static str, String>,
    pub earth_icons: usize,
    pub air_quality: AirQuality,
    pub time_indicator: Option<String>,
    pub emotion: Option<Emotion>,
    pub response_title: Option<String>,
    pub modal: Option<String>,
    pub notifications: Vec<String>,
    pub loading: bool,
    pub record: FootprintRecord,
}

#[derive(Debug, Serialize)]
pub struct SliderReport {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Install the stderr subscriber. `RUST_LOG` wins over `level`.
pub fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

/// Run a parsed command, writing its output to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let record = match &args.record {
        Some(path) => load_record(path).with_context(|| format!("loading record {}", path.display()))?,
        None => FootprintRecord::default(),
    };
    let config = match &args.config {
        Some(path) => ReportConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => ReportConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
    };

    match &args.command {
        Command::Score { json } => score(&record, *json, out),
        Command::Render(render_args) => render(record, config, render_args, out),
        Command::Housing { index, json } => housing(index, *json, out),
        Command::Household { size, json } => household(size, *json, out),
    }
}

fn score(record: &FootprintRecord, json: bool, out: &mut impl Write) -> Result<()> {
    let report = ScoreReport::from_record(record);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }
    for line in &report.categories {
        writeln!(
            out,
            "{:<12} {:>5.1}  {:<24} {:>6.1}px",
            line.category.id(),
            line.normalized,
            line.building,
            line.height
        )?;
    }
    writeln!(
        out,
        "atmosphere   {:>5.1}  {}",
        report.atmosphere_score,
        report.air_quality.label()
    )?;
    writeln!(
        out,
        "earths       {:>5.1}  {} icons, {}",
        report.earths_required,
        report.earth_icons.len(),
        report.comparison
    )?;
    Ok(())
}

/// Mount the report on a headless page and apply the requested actions.
pub fn render_snapshot(
    record: FootprintRecord,
    config: ReportConfig,
    args: &RenderArgs,
) -> Result<RenderSnapshot> {
    let tab = args
        .tab
        .as_deref()
        .map(|id| TabId::from_id(id).ok_or_else(|| anyhow!("unknown tab '{id}'")))
        .transpose()?;
    let emotion = args
        .emotion
        .as_deref()
        .map(|id| Emotion::from_id(id).ok_or_else(|| anyhow!("unknown emotion '{id}'")))
        .transpose()?;
    let open = args
        .open
        .as_deref()
        .map(|id| Category::from_id(id).ok_or_else(|| anyhow!("unknown category '{id}'")))
        .transpose()?;

    let settle_after_retake = f64::from(config.timing.retake_delay_ms)
        + f64::from(config.timing.loading_hide_delay_ms);

    let platform = Rc::new(HeadlessPlatform::with_report_page());
    platform.resize(args.width);
    let view = ReportView::mount_seeded(Rc::clone(&platform), record, config, args.seed);
    platform.settle();

    if let Some(tab) = tab {
        view.switch_tab(tab);
    }
    if let Some(emotion) = emotion {
        view.select_emotion(emotion);
    }
    if let Some(category) = open {
        view.open_building(category);
    }
    if args.retake {
        view.retake();
        // stop before the success notification slides away
        platform.advance(settle_after_retake);
    } else {
        platform.settle();
    }

    Ok(snapshot(&platform, &view))
}

fn snapshot(platform: &HeadlessPlatform, view: &ReportView<HeadlessPlatform>) -> RenderSnapshot {
    let slots = SNAPSHOT_SLOTS
        .iter()
        .filter_map(|id| platform.text_of(id).map(|text| (*id, text)))
        .collect();
    let earth_icons = platform
        .by_id("earthIcons")
        .map(|icons| platform.children(&icons).len())
        .unwrap_or(0);
    let modal = platform
        .by_class(None, "modal-content")
        .first()
        .and_then(|content| platform.children(content).first().copied())
        .and_then(|details| platform.inner_html(details));
    let notifications = platform
        .by_class(None, "notification")
        .into_iter()
        .map(|n| platform.text(n))
        .collect();

    RenderSnapshot {
        tab: view.current_tab(),
        slots,
        earth_icons,
        air_quality: view.air_quality(),
        time_indicator: platform.text_of("timeIndicator"),
        emotion: view.selected_emotion(),
        response_title: view
            .selected_emotion()
            .and_then(|_| platform.text_of("responseTitle")),
        modal,
        notifications,
        loading: view.is_loading(),
        record: view.record(),
    }
}

fn render(
    record: FootprintRecord,
    config: ReportConfig,
    args: &RenderArgs,
    out: &mut impl Write,
) -> Result<()> {
    let snap = render_snapshot(record, config, args)?;
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&snap)?)?;
        return Ok(());
    }

    writeln!(out, "tab: {}", snap.tab.id())?;
    for (id, text) in &snap.slots {
        writeln!(out, "{id}: {text}")?;
    }
    writeln!(out, "earth icons: {}", snap.earth_icons)?;
    if let Some(indicator) = &snap.time_indicator {
        writeln!(out, "air: {indicator}")?;
    }
    if let Some(title) = &snap.response_title {
        writeln!(out, "response: {title}")?;
    }
    if snap.modal.is_some() {
        writeln!(out, "modal: open")?;
    }
    for note in &snap.notifications {
        writeln!(out, "notification: {note}")?;
    }
    Ok(())
}

fn housing(index: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let platform = Rc::new(HeadlessPlatform::with_housing_page());
    let page = HousingPage::mount(Rc::clone(&platform));
    if !page.select_value(index) {
        bail!("housing index must be 0-4, got '{index}'");
    }
    let report = SliderReport {
        value: index.trim().to_string(),
        label: platform.text_of("housing-value").unwrap_or_default(),
        image: None,
    };
    print_slider(&report, json, out)
}

fn household(size: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let platform = Rc::new(HeadlessPlatform::with_household_page());
    let page = HouseholdPage::mount(Rc::clone(&platform));
    if !page.select_value(size) {
        bail!("household size must be a whole number, got '{size}'");
    }
    let image = platform
        .by_id("household-main-image")
        .and_then(|img| platform.attr(&img, "src"));
    let report = SliderReport {
        value: size.trim().to_string(),
        label: platform.text_of("household-value").unwrap_or_default(),
        image,
    };
    print_slider(&report, json, out)
}

fn print_slider(report: &SliderReport, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    } else {
        writeln!(out, "{}", report.label)?;
        if let Some(image) = &report.image {
            writeln!(out, "{image}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn score_lists_every_category() {
        let out = run_to_string(&["footprint", "score"]).unwrap();
        for category in Category::ALL {
            assert!(out.contains(category.id()), "{out}");
        }
        assert!(out.contains("Afternoon Air Quality: Moderate"));
    }

    #[test]
    fn render_applies_tab_and_emotion() {
        let args = RenderArgs {
            tab: Some("feelings".into()),
            emotion: Some("curious".into()),
            ..RenderArgs::default()
        };
        let snap =
            render_snapshot(FootprintRecord::default(), ReportConfig::default(), &args).unwrap();
        assert_eq!(snap.tab, TabId::Feelings);
        assert_eq!(snap.response_title.as_deref(), Some("Curiosity Leads to Change"));
        assert_eq!(snap.earth_icons, 4);
    }

    #[test]
    fn render_rejects_unknown_tab() {
        let args = RenderArgs {
            tab: Some("nope".into()),
            ..RenderArgs::default()
        };
        let err = render_snapshot(FootprintRecord::default(), ReportConfig::default(), &args)
            .unwrap_err();
        assert!(err.to_string().contains("unknown tab"));
    }

    #[test]
    fn housing_out_of_range_is_an_error() {
        assert!(run_to_string(&["footprint", "housing", "7"]).is_err());
        assert_eq!(run_to_string(&["footprint", "housing", "2"]).unwrap(), "2 BHK\n");
    }
}
