//! Share and retake buttons.

use footprint_report::types::FootprintRecord;

use super::{NotificationKind, ReportView};
use crate::platform::{EventKind, Platform, ShareData};
use crate::retake::regenerate;

pub const RETAKE_PROMPT: &str =
    "Are you sure you want to retake the quiz? This will reset your current results.";
pub const RETAKE_DONE_MESSAGE: &str = "Quiz completed! Here are your updated results.";
pub const SHARE_COPIED_MESSAGE: &str = "Share text copied to clipboard!";

const SHARE_TITLE: &str = "My Mumbai EcoFootprint Report";

/// Share payload for `record`, pointing at `url`.
pub fn share_data(record: &FootprintRecord, url: &str) -> ShareData {
    ShareData {
        title: SHARE_TITLE.to_string(),
        text: format!(
            "I just calculated my environmental impact! My Earth Overshoot Day is {}. \
             If everyone lived like me, we'd need {:.1} Earths. Check your footprint too! 🌱",
            record.overshoot_date, record.earths_required
        ),
        url: url.to_string(),
    }
}

impl<P: Platform + 'static> ReportView<P> {
    pub(super) fn bind_actions(&self) {
        let p = self.platform();
        if let Some(button) = p.by_class(None, "share-results-btn").into_iter().next() {
            self.bind(&button, EventKind::Click, |view, _| view.share());
        }
        if let Some(button) = p.by_class(None, "retake-quiz-btn").into_iter().next() {
            self.bind(&button, EventKind::Click, |view, _| view.retake());
        }
    }

    /// Share through the native sheet, or copy to the clipboard.
    pub fn share(&self) {
        let p = self.platform();
        let data = share_data(&self.record(), &p.location());

        if p.can_share() {
            tracing::info!("sharing via native share sheet");
            p.share(&data);
            return;
        }

        tracing::info!("native share unavailable, copying to clipboard");
        let text = format!("{}\n\n{}", data.text, data.url);
        let weak = self.downgrade();
        p.write_clipboard(
            &text,
            Box::new(move || {
                if let Some(view) = Self::upgrade(&weak) {
                    view.notify(SHARE_COPIED_MESSAGE, NotificationKind::Success);
                }
            }),
        );
    }

    /// Ask for confirmation, then regenerate the demo numbers after the
    /// retake delay. Ignored while a retake is already pending.
    pub fn retake(&self) {
        if self.is_loading() {
            tracing::debug!("retake already pending");
            return;
        }
        if !self.platform().confirm(RETAKE_PROMPT) {
            tracing::debug!("retake declined");
            return;
        }

        self.inner.state.borrow_mut().loading = true;
        self.show_loading();
        tracing::info!("retake started");

        let delay = self.config().timing.retake_delay_ms;
        self.schedule(delay, |view| view.finish_retake());
    }

    fn finish_retake(&self) {
        {
            let mut guard = self.inner.state.borrow_mut();
            let state = &mut *guard;
            regenerate(&mut state.record, &self.config().retake, &mut state.rng);
            state.loading = false;
        }

        self.render_summary();
        self.render_earth_icons();
        self.render_skyline();
        self.hide_loading();

        let record = self.record();
        tracing::info!(
            earths = record.earths_required,
            comparison = record.comparison_percent,
            "retake finished"
        );
        self.notify(RETAKE_DONE_MESSAGE, NotificationKind::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_text_rounds_earths() {
        let mut record = FootprintRecord::default();
        record.earths_required = 3.14159;
        let data = share_data(&record, "https://example.test/report");

        assert_eq!(data.title, "My Mumbai EcoFootprint Report");
        assert!(data.text.contains("Earth Overshoot Day is 28. Jan."));
        assert!(data.text.contains("we'd need 3.1 Earths"));
        assert_eq!(data.url, "https://example.test/report");
    }
}
