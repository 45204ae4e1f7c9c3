//! Time-window rate limiting for high-frequency page events.
//!
//! Both limiters are driven by explicit timestamps so callers decide the
//! clock; the web frontend feeds them time elapsed since session start.

use std::time::Duration;

/// Leading-edge throttle: the first call fires, then further calls are
/// dropped until `interval` has passed.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    reopens_at: Option<Duration>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            reopens_at: None,
        }
    }

    pub fn try_fire(&mut self, now: Duration) -> bool {
        match self.reopens_at {
            Some(t) if now < t => false,
            _ => {
                self.reopens_at = Some(now + self.interval);
                true
            }
        }
    }
}

/// Trailing debounce: fires once `wait` has elapsed since the latest trigger.
#[derive(Clone, Debug)]
pub struct Debounce {
    wait: Duration,
    deadline: Option<Duration>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Restart the quiet period.
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now + self.wait);
    }

    /// Returns true exactly once per quiet period, when it has elapsed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
