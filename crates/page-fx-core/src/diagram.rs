use crate::geometry::{all_pairs, hub_spokes, LineSegment, LineStyle, Rect};

/// The two connection diagrams on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Diagram {
    /// Every app wired to every tool (the M×N problem).
    Chaos,
    /// Apps and tools wired through a single hub.
    Hub,
}

impl Diagram {
    pub const ALL: [Diagram; 2] = [Diagram::Chaos, Diagram::Hub];

    pub fn style(self) -> LineStyle {
        match self {
            Diagram::Chaos => LineStyle::Chaos,
            Diagram::Hub => LineStyle::Hub,
        }
    }
}

/// Measured boxes of one diagram's nodes. `None` entries are nodes that could
/// not be measured.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagramLayout {
    pub container: Option<Rect>,
    pub sources: Vec<Option<Rect>>,
    /// Only used by the hub diagram.
    pub hub: Option<Rect>,
    pub targets: Vec<Option<Rect>>,
}

impl DiagramLayout {
    pub fn lines(&self, diagram: Diagram) -> Vec<LineSegment> {
        match diagram {
            Diagram::Chaos => all_pairs(&self.sources, &self.targets, self.container),
            Diagram::Hub => hub_spokes(&self.sources, self.hub, &self.targets, self.container),
        }
    }
}
