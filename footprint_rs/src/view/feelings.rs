//! "How do you feel" panel.

use footprint_report::types::Emotion;

use super::ReportView;
use crate::platform::{EventKind, Platform};

impl<P: Platform + 'static> ReportView<P> {
    pub(super) fn bind_emotions(&self) {
        let p = self.platform();
        for option in p.by_class(None, "emotion-option") {
            if let Some(id) = p.attr(&option, "data-emotion") {
                self.bind(&option, EventKind::Click, move |view, _| {
                    view.select_emotion_by_id(&id)
                });
            }
        }
    }

    /// Mark `emotion` selected and show its response.
    pub fn select_emotion(&self, emotion: Emotion) {
        let p = self.platform();

        for option in p.by_class(None, "emotion-option") {
            if p.attr(&option, "data-emotion").as_deref() == Some(emotion.id()) {
                p.add_class(&option, "selected");
            } else {
                p.remove_class(&option, "selected");
            }
        }
        self.inner.state.borrow_mut().emotion = Some(emotion);

        let response = emotion.response();
        for (id, text) in [
            ("responseTitle", response.title),
            ("responseMessage", response.message),
            ("responseEmoji", response.emoji),
        ] {
            if let Some(node) = p.by_id(id) {
                p.set_text(&node, text);
            }
        }

        if let Some(area) = p.by_id("emotionResponse") {
            p.remove_class(&area, "hidden");
            p.scroll_into_view(&area);
        }
        tracing::debug!("emotion selected: {}", emotion.id());
    }

    /// Select by `data-emotion` key. Unknown keys change nothing.
    pub fn select_emotion_by_id(&self, id: &str) {
        match Emotion::from_id(id) {
            Some(emotion) => self.select_emotion(emotion),
            None => tracing::debug!("ignoring unknown emotion {id:?}"),
        }
    }
}
