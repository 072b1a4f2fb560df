//! Frame timing and loop cancellation.

use std::cell::Cell;
use std::rc::Rc;

/// Timing for one frame: absolute time in milliseconds and the step since the
/// previous frame in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub now_ms: f64,
    pub dt_sec: f32,
}

/// Turns a stream of timestamps into per-frame deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock whose first delta is measured from `start_ms`.
    pub fn starting_at(start_ms: f64) -> Self {
        Self {
            last_ms: Some(start_ms),
        }
    }

    /// The first call without a start time yields `dt = 0`. Timestamps going
    /// backwards also yield 0.
    pub fn advance(&mut self, now_ms: f64) -> FrameTime {
        let dt_ms = self.last_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_ms = Some(now_ms);
        FrameTime {
            now_ms,
            dt_sec: (dt_ms / 1000.0) as f32,
        }
    }
}

/// Shared stop flag for a running frame loop.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
