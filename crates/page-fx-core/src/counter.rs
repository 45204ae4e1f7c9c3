//! Eased numeric counters.

use crate::error::FxError;
use std::time::Duration;

/// Cubic ease-out: fast start, gentle landing. `t` is clamped to \[0, 1\].
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Parse the integer target carried by a counter element.
pub fn parse_target(raw: &str) -> Result<u64, FxError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| FxError::InvalidCounterTarget(raw.to_string()))
}

/// Render `current` using the unit implied by the final `target`.
pub fn format_count(current: u64, target: u64) -> String {
    if target >= 1_000_000 {
        format!("{:.1}M+", current as f64 / 1_000_000.0)
    } else if target >= 1_000 {
        format!("{:.0}K+", current as f64 / 1_000.0)
    } else {
        current.to_string()
    }
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u64,
    started: Duration,
    duration: Duration,
}

impl CounterAnimation {
    pub fn new(target: u64, started: Duration, duration: Duration) -> Self {
        Self {
            target,
            started,
            duration,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn value_at(&self, now: Duration) -> u64 {
        let eased = ease_out_cubic(self.progress(now));
        (self.target as f64 * eased).floor() as u64
    }

    pub fn text_at(&self, now: Duration) -> String {
        format_count(self.value_at(now), self.target)
    }

    pub fn is_done(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn formats_by_target_magnitude() {
        assert_eq!(format_count(2_500_000, 2_500_000), "2.5M+");
        assert_eq!(format_count(0, 2_500_000), "0.0M+");
        assert_eq!(format_count(12_000, 12_000), "12K+");
        assert_eq!(format_count(450, 450), "450");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_target(" 42 "), Ok(42));
        assert!(matches!(
            parse_target("lots"),
            Err(FxError::InvalidCounterTarget(_))
        ));
        assert!(parse_target("-5").is_err());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let c = CounterAnimation::new(10, Duration::from_secs(1), Duration::ZERO);
        assert!(c.is_done(Duration::from_secs(1)));
        assert_eq!(c.value_at(Duration::from_secs(1)), 10);
    }
}
