//! UI state derived from the current scroll offset.
//!
//! Every function here is a pure function of its inputs, so repeated calls
//! with the same offset produce the same result.

use crate::config::PageConfig;
use crate::constants::{PARALLAX_BASE_SPEED, PARALLAX_SPEED_STEP};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAppearance {
    Translucent,
    Solid,
}

impl NavAppearance {
    pub fn for_offset(scroll_y: f64, solid_after_px: f64) -> Self {
        if scroll_y > solid_after_px {
            NavAppearance::Solid
        } else {
            NavAppearance::Translucent
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NavAppearance::Solid => "rgba(31, 33, 33, 0.95)",
            NavAppearance::Translucent => "rgba(31, 33, 33, 0.7)",
        }
    }

    pub fn backdrop_filter(self) -> &'static str {
        match self {
            NavAppearance::Solid => "blur(20px)",
            NavAppearance::Translucent => "blur(10px)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FabVisibility {
    Hidden,
    Visible,
}

impl FabVisibility {
    pub fn for_offset(scroll_y: f64, visible_after_px: f64) -> Self {
        if scroll_y > visible_after_px {
            FabVisibility::Visible
        } else {
            FabVisibility::Hidden
        }
    }

    pub fn opacity(self) -> &'static str {
        match self {
            FabVisibility::Visible => "1",
            FabVisibility::Hidden => "0",
        }
    }

    pub fn transform(self) -> &'static str {
        match self {
            FabVisibility::Visible => "scale(1)",
            FabVisibility::Hidden => "scale(0.8)",
        }
    }

    pub fn pointer_events(self) -> &'static str {
        match self {
            FabVisibility::Visible => "auto",
            FabVisibility::Hidden => "none",
        }
    }
}

#[inline]
pub fn parallax_speed(index: usize) -> f64 {
    PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP
}

/// Vertical parallax offset in px for the cube at `index`.
#[inline]
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    scroll_y * parallax_speed(index)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    pub nav: NavAppearance,
    pub fab: FabVisibility,
    pub parallax: Vec<f64>,
}

pub fn scroll_frame(scroll_y: f64, cube_count: usize, cfg: &PageConfig) -> ScrollFrame {
    ScrollFrame {
        nav: NavAppearance::for_offset(scroll_y, cfg.nav_solid_after_px),
        fab: FabVisibility::for_offset(scroll_y, cfg.fab_visible_after_px),
        parallax: (0..cube_count)
            .map(|i| parallax_offset(scroll_y, i))
            .collect(),
    }
}

/// Viewport-relative vertical extent of a page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// The last section (in document order) straddling the probe line.
pub fn active_section(sections: &[SectionBox], probe_px: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.top <= probe_px && s.bottom >= probe_px)
        .map(|s| s.id.as_str())
}

/// Document scroll position that brings a section just below the fixed nav.
#[inline]
pub fn scroll_target(section_offset_top: f64, nav_offset_px: f64) -> f64 {
    section_offset_top - nav_offset_px
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, bottom: f64) -> SectionBox {
        SectionBox {
            id: id.to_string(),
            top,
            bottom,
        }
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(NavAppearance::for_offset(100.0, 100.0), NavAppearance::Translucent);
        assert_eq!(NavAppearance::for_offset(100.5, 100.0), NavAppearance::Solid);
        assert_eq!(FabVisibility::for_offset(500.0, 500.0), FabVisibility::Hidden);
        assert_eq!(FabVisibility::for_offset(501.0, 500.0), FabVisibility::Visible);
    }

    #[test]
    fn parallax_speed_grows_per_cube() {
        let frame = scroll_frame(1000.0, 3, &PageConfig::default());
        assert_eq!(frame.parallax.len(), 3);
        assert!((frame.parallax[0] - 300.0).abs() < 1e-9);
        assert!((frame.parallax[1] - 400.0).abs() < 1e-9);
        assert!((frame.parallax[2] - 500.0).abs() < 1e-9);
    }

    #[test]
    fn spy_prefers_later_overlapping_section() {
        let sections = [
            section("hero", -400.0, 150.0),
            section("challenges", 150.0, 900.0),
        ];
        assert_eq!(active_section(&sections, 150.0), Some("challenges"));
        assert_eq!(active_section(&sections[..1], 150.0), Some("hero"));
        assert_eq!(active_section(&[section("x", 200.0, 300.0)], 150.0), None);
    }

    #[test]
    fn navigation_clears_the_fixed_nav() {
        assert_eq!(scroll_target(1200.0, 80.0), 1120.0);
        assert_eq!(scroll_target(0.0, 80.0), -80.0);
    }
}
