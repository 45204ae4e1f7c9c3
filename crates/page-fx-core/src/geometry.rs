//! Connection-line geometry for the diagram overlays.
//!
//! Boxes are viewport-relative (as reported by `getBoundingClientRect`), and
//! every produced segment is expressed relative to its container's origin so
//! it can be drawn directly into an absolutely positioned SVG overlay.

use crate::constants::{CHAOS_EMPHASIS_STAGGER, HUB_EMPHASIS_STAGGER};
use glam::DVec2;
use std::time::Duration;

pub const LINE_DASH_ARRAY: &str = "5,5";
pub const LINE_ANIMATION: &str = "connectionPulse 2s infinite";

/// Axis-aligned box in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Visual weight of a connection line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Dense and faint, used for the all-pairs illustration.
    Chaos,
    /// Bold, used for the hub illustration.
    Hub,
}

/// Stroke values applied once a diagram scrolls into view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emphasis {
    pub opacity: f64,
    pub stroke_width: f64,
}

impl LineStyle {
    pub fn stroke(self) -> &'static str {
        match self {
            LineStyle::Chaos => "#ff5459",
            LineStyle::Hub => "#32b8cd",
        }
    }

    pub fn stroke_width(self) -> f64 {
        match self {
            LineStyle::Chaos => 1.0,
            LineStyle::Hub => 2.0,
        }
    }

    pub fn opacity(self) -> f64 {
        match self {
            LineStyle::Chaos => 0.3,
            LineStyle::Hub => 0.6,
        }
    }

    pub fn emphasis(self) -> Emphasis {
        match self {
            LineStyle::Chaos => Emphasis {
                opacity: 0.6,
                stroke_width: 2.0,
            },
            LineStyle::Hub => Emphasis {
                opacity: 0.8,
                stroke_width: 3.0,
            },
        }
    }

    /// Delay between emphasising consecutive lines.
    pub fn stagger(self) -> Duration {
        match self {
            LineStyle::Chaos => CHAOS_EMPHASIS_STAGGER,
            LineStyle::Hub => HUB_EMPHASIS_STAGGER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub from: DVec2,
    pub to: DVec2,
    pub style: LineStyle,
}

/// Segment between the centres of `start` and `end`, relative to `container`.
///
/// Returns `None` when any of the three boxes is missing; a missing element is
/// an optional page feature, not an error.
pub fn connection_line(
    start: Option<Rect>,
    end: Option<Rect>,
    container: Option<Rect>,
    style: LineStyle,
) -> Option<LineSegment> {
    let (start, end, container) = (start?, end?, container?);
    let origin = container.origin();
    Some(LineSegment {
        from: start.center() - origin,
        to: end.center() - origin,
        style,
    })
}

/// One chaos line for every (source, target) pair.
pub fn all_pairs(
    sources: &[Option<Rect>],
    targets: &[Option<Rect>],
    container: Option<Rect>,
) -> Vec<LineSegment> {
    let mut lines = Vec::with_capacity(sources.len() * targets.len());
    for source in sources {
        for target in targets {
            if let Some(line) = connection_line(*source, *target, container, LineStyle::Chaos) {
                lines.push(line);
            }
        }
    }
    lines
}

/// App-to-hub spokes followed by hub-to-tool spokes.
pub fn hub_spokes(
    apps: &[Option<Rect>],
    hub: Option<Rect>,
    tools: &[Option<Rect>],
    container: Option<Rect>,
) -> Vec<LineSegment> {
    let inbound = apps
        .iter()
        .filter_map(|app| connection_line(*app, hub, container, LineStyle::Hub));
    let outbound = tools
        .iter()
        .filter_map(|tool| connection_line(hub, *tool, container, LineStyle::Hub));
    inbound.chain(outbound).collect()
}
