//! Count-up animation for headline numbers.

use std::rc::Rc;

use footprint_report::format::format_fixed;

use crate::platform::Platform;

/// Ease-out cubic: fast start, gentle landing.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// A single counter run from `from` to `to`.
///
/// Each instance keeps its own start time, so several counters (or a
/// restarted one) never share progress.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    from: f64,
    to: f64,
    duration_ms: f64,
    decimals: usize,
    started_at: f64,
}

impl CounterAnimation {
    pub fn new(from: f64, to: f64, duration_ms: u32, decimals: usize, started_at: f64) -> Self {
        Self {
            from,
            to,
            duration_ms: f64::from(duration_ms),
            decimals,
            started_at,
        }
    }

    /// Restart from `now`.
    pub fn restart(&mut self, now: f64) {
        self.started_at = now;
    }

    /// Displayed text at `now`, and whether the run is finished.
    pub fn sample(&self, now: f64) -> (String, bool) {
        let elapsed = (now - self.started_at).max(0.0);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration_ms).min(1.0)
        };
        if progress >= 1.0 {
            return (format_fixed(self.to, self.decimals), true);
        }
        let value = self.from + (self.to - self.from) * ease_out_cubic(progress);
        (format_fixed(value, self.decimals), false)
    }
}

/// Drive `animation` on `node`, one step per animation frame.
pub fn animate_counter<P: Platform + 'static>(
    platform: &Rc<P>,
    node: P::Node,
    animation: CounterAnimation,
) {
    let p = Rc::clone(platform);
    platform.request_frame(Box::new(move |now| step(p, node, animation, now)));
}

fn step<P: Platform + 'static>(platform: Rc<P>, node: P::Node, animation: CounterAnimation, now: f64) {
    let (text, done) = animation.sample(now);
    platform.set_text(&node, &text);
    if !done {
        let p = Rc::clone(&platform);
        platform.request_frame(Box::new(move |now| step(p, node, animation, now)));
    }
}
