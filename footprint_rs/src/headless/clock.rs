//! Virtual clock with timer and animation-frame queues.

use std::cell::RefCell;
use std::rc::Rc;

use crate::platform::{Callback, FrameCallback, Tick, TimerHandle};

/// Frame interval of the virtual display (~60 Hz).
pub const FRAME_MS: f64 = 16.0;

pub(crate) enum Job {
    Once(Callback),
    Repeat(Rc<RefCell<Tick>>),
    Frames(Vec<FrameCallback>),
}

enum TimerKind {
    Once(Option<Callback>),
    Repeat { period: f64, tick: Rc<RefCell<Tick>> },
}

struct Timer {
    handle: TimerHandle,
    due: f64,
    seq: u64,
    kind: TimerKind,
}

#[derive(Default)]
pub(crate) struct Clock {
    now: f64,
    next_handle: i32,
    seq: u64,
    timers: Vec<Timer>,
    frames: Vec<FrameCallback>,
}

impl Clock {
    pub fn now(&self) -> f64 {
        self.now
    }

    fn next_handle(&mut self) -> TimerHandle {
        self.next_handle += 1;
        TimerHandle(self.next_handle)
    }

    fn push(&mut self, due: f64, kind: TimerKind) -> TimerHandle {
        let handle = self.next_handle();
        self.seq += 1;
        self.timers.push(Timer {
            handle,
            due,
            seq: self.seq,
            kind,
        });
        handle
    }

    pub fn schedule(&mut self, delay_ms: u32, callback: Callback) -> TimerHandle {
        let due = self.now + f64::from(delay_ms);
        self.push(due, TimerKind::Once(Some(callback)))
    }

    pub fn schedule_repeating(&mut self, period_ms: u32, tick: Tick) -> TimerHandle {
        let period = f64::from(period_ms.max(1));
        let due = self.now + period;
        self.push(
            due,
            TimerKind::Repeat {
                period,
                tick: Rc::new(RefCell::new(tick)),
            },
        )
    }

    pub fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }

    pub fn request_frame(&mut self, callback: FrameCallback) {
        self.frames.push(callback);
    }

    /// Number of live timers, one-shot and repeating.
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    pub fn repeating_count(&self) -> usize {
        self.timers
            .iter()
            .filter(|t| matches!(t.kind, TimerKind::Repeat { .. }))
            .count()
    }

    /// True while one-shot timers or frames are queued.
    pub fn has_transient_work(&self) -> bool {
        !self.frames.is_empty()
            || self
                .timers
                .iter()
                .any(|t| matches!(t.kind, TimerKind::Once(_)))
    }

    fn next_frame_tick(&self) -> f64 {
        ((self.now / FRAME_MS).floor() + 1.0) * FRAME_MS
    }

    /// Pop the next job due at or before `limit`, moving the clock to its
    /// due time. `None` moves the clock to `limit`.
    pub fn next_job(&mut self, limit: f64) -> Option<(f64, Job)> {
        let timer_idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= limit)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
            .map(|(i, _)| i);
        let frame_at = (!self.frames.is_empty())
            .then(|| self.next_frame_tick())
            .filter(|t| *t <= limit);

        match (timer_idx, frame_at) {
            (Some(i), frame) if frame.is_none_or(|f| self.timers[i].due <= f) => {
                let due = self.timers[i].due;
                self.now = self.now.max(due);
                let job = match &mut self.timers[i].kind {
                    TimerKind::Once(cb) => {
                        let cb = cb.take();
                        self.timers.remove(i);
                        cb.map(Job::Once)
                    }
                    TimerKind::Repeat { period, tick } => {
                        let tick = Rc::clone(tick);
                        self.timers[i].due += *period;
                        self.seq += 1;
                        self.timers[i].seq = self.seq;
                        Some(Job::Repeat(tick))
                    }
                };
                job.map(|j| (self.now, j))
            }
            (_, Some(at)) => {
                self.now = at;
                let frames = std::mem::take(&mut self.frames);
                Some((at, Job::Frames(frames)))
            }
            _ => {
                self.now = self.now.max(limit);
                None
            }
        }
    }
}
