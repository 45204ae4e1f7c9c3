//! Runtime-tunable parameters.
//!
//! Defaults come from [`crate::constants`]. The web frontend uses the
//! defaults as-is; tests shrink intervals or thresholds to exercise edges.

use crate::constants::*;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct PageConfig {
    pub scroll_throttle: Duration,
    pub spy_throttle: Duration,
    pub resize_throttle: Duration,
    pub resize_debounce: Duration,
    pub counter_duration: Duration,
    pub nav_solid_after_px: f64,
    pub fab_visible_after_px: f64,
    pub spy_probe_px: f64,
    /// Section ids in page order; the first one is the "top" target.
    pub sections: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_throttle: SCROLL_THROTTLE,
            spy_throttle: SPY_THROTTLE,
            resize_throttle: RESIZE_THROTTLE,
            resize_debounce: RESIZE_DEBOUNCE,
            counter_duration: COUNTER_DURATION,
            nav_solid_after_px: NAV_SOLID_AFTER_PX,
            fab_visible_after_px: FAB_VISIBLE_AFTER_PX,
            spy_probe_px: SPY_PROBE_PX,
            sections: SECTION_ORDER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PageConfig {
    /// Id of the section the "jump to top" shortcut targets.
    pub fn top_section(&self) -> Option<&str> {
        self.sections.first().map(String::as_str)
    }
}
