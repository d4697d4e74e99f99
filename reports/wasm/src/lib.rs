//! Browser entry points for the EcoFootprint pages.
//!
//! Each `start_*` export mounts one page on the live document through
//! [`WebPlatform`] and returns a handle. JavaScript must keep the handle
//! alive for as long as the page is interactive: dropping it (or calling
//! `free()`) detaches the page logic, and pending timers become no-ops.
//!
//! ```js
//! import init, { start_report } from "./footprint_wasm.js";
//! await init();
//! const report = start_report();
//! report.switch_tab("solutions");
//! ```

mod web;

use std::io::{self, Write};
use std::rc::Rc;

use footprint::{HeroPage, HouseholdPage, HousingPage, ReportConfig, ReportView};
use footprint_report::types::FootprintRecord;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::prelude::*;

pub use web::WebPlatform;

/// Install the panic hook and route `tracing` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
}

// ============================================================================
// Console logging
// ============================================================================

/// `MakeWriter` that hands each formatted event to `console.log`.
#[derive(Clone, Copy)]
struct ConsoleWriter;

/// Buffers one event and flushes it to the console when dropped.
struct ConsoleLine(Vec<u8>);

impl Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.0);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&JsValue::from_str(line));
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine(Vec::new())
    }
}

fn platform() -> Result<Rc<WebPlatform>, JsValue> {
    WebPlatform::new()
        .map(Rc::new)
        .ok_or_else(|| JsValue::from_str("no browser window available"))
}

// ============================================================================
// Report page
// ============================================================================

/// Mounted report page.
#[wasm_bindgen]
pub struct ReportHandle {
    view: ReportView<WebPlatform>,
}

#[wasm_bindgen]
impl ReportHandle {
    /// Jump to the solutions tab.
    pub fn show_solutions(&self) {
        self.view.show_solutions();
    }

    /// Switch to the tab with the given id. Unknown ids are ignored.
    pub fn switch_tab(&self, id: &str) {
        self.view.switch_tab_by_id(id);
    }

    /// Start the retake flow, asking the visitor first.
    pub fn retake(&self) {
        self.view.retake();
    }

    pub fn share(&self) {
        self.view.share();
    }

    /// Id of the visible tab.
    pub fn current_tab(&self) -> String {
        self.view.current_tab().id().to_string()
    }

    /// Current record as JSON.
    pub fn record_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.view.record())
            .map_err(|e| JsValue::from_str(&format!("Failed to encode record: {}", e)))
    }
}

/// Mount the report page with the demo record.
#[wasm_bindgen]
pub fn start_report() -> Result<ReportHandle, JsValue> {
    mount_report(FootprintRecord::default())
}

/// Mount the report page with a record supplied as JSON.
#[wasm_bindgen]
pub fn start_report_with_record(json: &str) -> Result<ReportHandle, JsValue> {
    let record = footprint_report::parse_record(json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse record: {}", e)))?;
    record
        .validate()
        .map_err(|e| JsValue::from_str(&format!("Invalid record: {}", e)))?;
    mount_report(record)
}

fn mount_report(record: FootprintRecord) -> Result<ReportHandle, JsValue> {
    let view = ReportView::mount(platform()?, record, ReportConfig::default());
    tracing::info!("report page mounted");
    Ok(ReportHandle { view })
}

// ============================================================================
// Hero page
// ============================================================================

/// Mounted landing page with the background slideshow.
#[wasm_bindgen]
pub struct HeroHandle {
    page: HeroPage<WebPlatform>,
}

#[wasm_bindgen]
impl HeroHandle {
    pub fn pause(&self) {
        self.page.pause();
    }

    pub fn resume(&self) {
        self.page.resume();
    }

    pub fn next_slide(&self) {
        self.page.next_slide();
    }

    pub fn current_slide(&self) -> usize {
        self.page.current_slide()
    }
}

#[wasm_bindgen]
pub fn start_hero() -> Result<HeroHandle, JsValue> {
    let page = HeroPage::mount(platform()?, &ReportConfig::default().timing);
    Ok(HeroHandle { page })
}

// ============================================================================
// Quiz sliders
// ============================================================================

/// Mounted housing question.
#[wasm_bindgen]
pub struct HousingHandle {
    page: HousingPage<WebPlatform>,
}

#[wasm_bindgen]
impl HousingHandle {
    /// Selected housing index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.page.selected()
    }
}

#[wasm_bindgen]
pub fn start_housing() -> Result<HousingHandle, JsValue> {
    Ok(HousingHandle {
        page: HousingPage::mount(platform()?),
    })
}

/// Mounted household-size question.
#[wasm_bindgen]
pub struct HouseholdHandle {
    page: HouseholdPage<WebPlatform>,
}

#[wasm_bindgen]
impl HouseholdHandle {
    pub fn size(&self) -> Option<u32> {
        self.page.size()
    }
}

#[wasm_bindgen]
pub fn start_household() -> Result<HouseholdHandle, JsValue> {
    Ok(HouseholdHandle {
        page: HouseholdPage::mount(platform()?),
    })
}
