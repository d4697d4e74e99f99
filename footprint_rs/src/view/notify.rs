//! Toast notifications.

use std::rc::Rc;

use super::ReportView;
use crate::platform::Platform;

const BASE_CLASSES: &str = "notification fixed top-4 right-4 px-6 py-4 rounded-lg font-medium z-50 transform translate-x-full transition-transform duration-300";

/// Notification colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl NotificationKind {
    pub fn classes(self) -> &'static str {
        match self {
            NotificationKind::Success => "bg-green-500 text-white",
            NotificationKind::Error => "bg-red-500 text-white",
            NotificationKind::Info => "bg-blue-500 text-white",
            NotificationKind::Warning => "bg-orange-500 text-white",
        }
    }
}

impl<P: Platform + 'static> ReportView<P> {
    /// Slide a notification in from the right, then out and away.
    ///
    /// Notifications are independent; several can be on screen at once.
    pub fn notify(&self, message: &str, kind: NotificationKind) {
        let p = self.platform();
        let Some(body) = p.body() else {
            return;
        };
        let Some(node) = p.create("div") else {
            return;
        };
        for class in BASE_CLASSES.split_whitespace().chain(kind.classes().split_whitespace()) {
            p.add_class(&node, class);
        }
        p.set_text(&node, message);
        p.set_style(&node, "transform", "translateX(100%)");
        p.append(&body, &node);

        let timing = &self.config().timing;
        let exit_ms = timing.notification_exit_ms;

        let (platform, target) = (Rc::clone(p), node.clone());
        p.schedule(
            timing.notification_enter_ms,
            Box::new(move || platform.set_style(&target, "transform", "translateX(0)")),
        );

        let platform = Rc::clone(p);
        p.schedule(
            timing.notification_lifetime_ms,
            Box::new(move || {
                platform.set_style(&node, "transform", "translateX(100%)");
                let remover = Rc::clone(&platform);
                platform.schedule(exit_ms, Box::new(move || remover.remove(&node)));
            }),
        );
    }
}
