//! Owned repeating timer.

use std::cell::Cell;
use std::rc::Rc;

use crate::platform::{Platform, TimerHandle};

/// A repeating timer that owns its platform handle.
///
/// At most one underlying interval exists per instance: `start` on a running
/// timer is a no-op and `stop` on a stopped one does nothing. Dropping the
/// timer stops it.
pub struct RepeatingTimer<P: Platform> {
    platform: Rc<P>,
    period_ms: u32,
    tick: Rc<dyn Fn()>,
    handle: Cell<Option<TimerHandle>>,
}

impl<P: Platform> RepeatingTimer<P> {
    /// Create a stopped timer.
    pub fn new(platform: Rc<P>, period_ms: u32, tick: impl Fn() + 'static) -> Self {
        Self {
            platform,
            period_ms,
            tick: Rc::new(tick),
            handle: Cell::new(None),
        }
    }

    pub fn start(&self) {
        if self.handle.get().is_some() {
            return;
        }
        let tick = Rc::clone(&self.tick);
        let handle = self
            .platform
            .schedule_repeating(self.period_ms, Box::new(move || tick()));
        self.handle.set(Some(handle));
    }

    pub fn stop(&self) {
        if let Some(handle) = self.handle.take() {
            self.platform.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl<P: Platform> Drop for RepeatingTimer<P> {
    fn drop(&mut self) {
        self.stop();
    }
}
