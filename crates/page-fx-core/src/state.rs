//! Page-wide effect state.
//!
//! The whole page is driven through [`PageState::step`], a transition from
//! one input [`Event`] to a batch of [`Effect`]s. The state never touches a
//! document itself: the web frontend measures elements, feeds events in and
//! applies the returned effects. Timed work (intro animations, staggered line
//! emphasis, debounced rebuilds, modal transitions) is kept as pending timers
//! that fire on the next `Frame` event at or after their due time.

use crate::config::PageConfig;
use crate::constants::{
    DIAGRAM_BUILD_DELAY, HERO_INTRO_DELAY, PROTOCOL_RINGS_DELAY, USE_CASE_SETTLE,
};
use crate::counter::CounterAnimation;
use crate::diagram::{Diagram, DiagramLayout};
use crate::geometry::{LineSegment, Rect};
use crate::keys::{self, Shortcut};
use crate::modal::{Modal, ModalPhase, ModalTransition};
use crate::once::OneShot;
use crate::rate::{Debounce, Throttle};
use crate::scroll::{self, FabVisibility, NavAppearance, SectionBox};
use crate::tilt::{card_tilt, CubeState, Tilt};
use fnv::{FnvHashMap, FnvHashSet};
use glam::DVec2;
use smallvec::SmallVec;
use std::time::Duration;

/// Stable handle for a registered page element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Inputs to the page state. All timestamps are measured from session start.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Started {
        now: Duration,
    },
    /// One display refresh.
    Frame {
        now: Duration,
    },
    Scroll {
        scroll_y: f64,
        now: Duration,
    },
    /// Answer to [`Effect::ProbeSections`]: section boxes in document order.
    SectionsProbed {
        sections: Vec<SectionBox>,
    },
    Resize {
        now: Duration,
    },
    /// Answer to [`Effect::MeasureDiagrams`], once per diagram.
    DiagramMeasured {
        diagram: Diagram,
        layout: DiagramLayout,
        now: Duration,
    },
    DiagramVisible {
        diagram: Diagram,
        now: Duration,
    },
    CounterVisible {
        id: ElementId,
        target: u64,
        now: Duration,
    },
    RevealVisible {
        id: ElementId,
    },
    CardEnter {
        id: ElementId,
    },
    CardMove {
        id: ElementId,
        card: Rect,
        pointer: DVec2,
    },
    CardLeave {
        id: ElementId,
    },
    CubeEnter {
        index: usize,
    },
    CubeLeave {
        index: usize,
    },
    UseCaseClicked {
        id: ElementId,
        now: Duration,
    },
    NavigateTo {
        section: String,
    },
    /// Answer to [`Effect::ScrollToSection`] when the section exists.
    SectionReached {
        section: String,
    },
    Key {
        key: String,
        ctrl: bool,
        now: Duration,
    },
    ModalOpenRequested {
        now: Duration,
    },
    ModalCloseRequested {
        now: Duration,
    },
}

/// Side effects for the frontend to apply, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Nav(NavAppearance),
    Fab(FabVisibility),
    CubeTransform {
        index: usize,
        transform: String,
        hovered: bool,
    },
    /// Measure section boxes and reply with [`Event::SectionsProbed`].
    ProbeSections,
    /// Mark the nav link for this section active; `None` clears all links.
    ActivateNav(Option<String>),
    /// Scroll to the section and reply with [`Event::SectionReached`] if it exists.
    ScrollToSection(String),
    /// Measure both diagrams and reply with [`Event::DiagramMeasured`].
    MeasureDiagrams,
    DrawDiagram {
        diagram: Diagram,
        lines: Vec<LineSegment>,
    },
    EmphasizeLine {
        diagram: Diagram,
        index: usize,
    },
    CounterText {
        id: ElementId,
        text: String,
    },
    Reveal(ElementId),
    CardTransform {
        id: ElementId,
        tilt: Tilt,
        hovering: bool,
    },
    UseCaseSelected(ElementId),
    UseCaseSettled {
        id: ElementId,
        active: bool,
    },
    HeroIntro,
    ProtocolRings,
    InsertModal,
    ShowModal,
    HideModal,
    RemoveModal,
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Copy, Debug, PartialEq)]
enum TimerAction {
    BuildDiagrams,
    HeroIntro,
    ProtocolRings,
    Emphasize { diagram: Diagram, index: usize },
    SettleUseCase(ElementId),
}

#[derive(Clone, Copy, Debug)]
struct Timer {
    due: Duration,
    action: TimerAction,
}

pub struct PageState {
    config: PageConfig,
    scroll_throttle: Throttle,
    spy_throttle: Throttle,
    resize_throttle: Throttle,
    resize_debounce: Debounce,
    counted: OneShot<ElementId>,
    revealed: OneShot<ElementId>,
    counters: Vec<(ElementId, CounterAnimation)>,
    line_counts: FnvHashMap<Diagram, usize>,
    // seen on screen before their lines were built
    emphasis_pending: FnvHashSet<Diagram>,
    timers: Vec<Timer>,
    active_section: Option<String>,
    cubes: Vec<CubeState>,
    hovered_cards: FnvHashSet<ElementId>,
    active_use_case: Option<ElementId>,
    modal: Modal,
    scroll_y: f64,
}

impl PageState {
    pub fn new(config: PageConfig, cube_count: usize) -> Self {
        Self {
            scroll_throttle: Throttle::new(config.scroll_throttle),
            spy_throttle: Throttle::new(config.spy_throttle),
            resize_throttle: Throttle::new(config.resize_throttle),
            resize_debounce: Debounce::new(config.resize_debounce),
            config,
            counted: OneShot::new(),
            revealed: OneShot::new(),
            counters: Vec::new(),
            line_counts: FnvHashMap::default(),
            emphasis_pending: FnvHashSet::default(),
            timers: Vec::new(),
            active_section: None,
            cubes: vec![CubeState::default(); cube_count],
            hovered_cards: FnvHashSet::default(),
            active_use_case: None,
            modal: Modal::default(),
            scroll_y: 0.0,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn modal_phase(&self) -> ModalPhase {
        self.modal.phase()
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_counted(&self, id: ElementId) -> bool {
        self.counted.contains(&id)
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.revealed.contains(&id)
    }

    pub fn line_count(&self, diagram: Diagram) -> usize {
        self.line_counts.get(&diagram).copied().unwrap_or(0)
    }

    /// True while any counter is still running.
    pub fn is_animating(&self) -> bool {
        !self.counters.is_empty()
    }

    pub fn step(&mut self, event: Event) -> Effects {
        let mut out = Effects::new();
        match event {
            Event::Started { now } => {
                self.schedule(now + DIAGRAM_BUILD_DELAY, TimerAction::BuildDiagrams);
                self.schedule(now + HERO_INTRO_DELAY, TimerAction::HeroIntro);
                self.schedule(now + PROTOCOL_RINGS_DELAY, TimerAction::ProtocolRings);
                out.push(Effect::ProbeSections);
            }
            Event::Frame { now } => self.on_frame(now, &mut out),
            Event::Scroll { scroll_y, now } => {
                self.scroll_y = scroll_y;
                if self.scroll_throttle.try_fire(now) {
                    self.push_scroll_frame(&mut out);
                }
                if self.spy_throttle.try_fire(now) {
                    out.push(Effect::ProbeSections);
                }
            }
            Event::SectionsProbed { sections } => {
                let active =
                    scroll::active_section(&sections, self.config.spy_probe_px).map(str::to_owned);
                self.active_section.clone_from(&active);
                out.push(Effect::ActivateNav(active));
            }
            Event::Resize { now } => {
                if self.resize_throttle.try_fire(now) {
                    self.resize_debounce.trigger(now);
                }
            }
            Event::DiagramMeasured {
                diagram,
                layout,
                now,
            } => {
                let lines = layout.lines(diagram);
                log::debug!("[diagram] {:?} rebuilt with {} lines", diagram, lines.len());
                self.line_counts.insert(diagram, lines.len());
                self.cancel_emphasis(diagram);
                out.push(Effect::DrawDiagram { diagram, lines });
                if self.emphasis_pending.remove(&diagram) {
                    self.schedule_emphasis(diagram, now);
                }
            }
            Event::DiagramVisible { diagram, now } => {
                if self.line_counts.contains_key(&diagram) {
                    self.schedule_emphasis(diagram, now);
                } else {
                    self.emphasis_pending.insert(diagram);
                }
            }
            Event::CounterVisible { id, target, now } => {
                if self.counted.mark(id) {
                    let anim = CounterAnimation::new(target, now, self.config.counter_duration);
                    self.counters.push((id, anim));
                }
            }
            Event::RevealVisible { id } => {
                if self.revealed.mark(id) {
                    out.push(Effect::Reveal(id));
                }
            }
            Event::CardEnter { id } => {
                self.hovered_cards.insert(id);
                out.push(Effect::CardTransform {
                    id,
                    tilt: Tilt::HOVER,
                    hovering: true,
                });
            }
            Event::CardMove { id, card, pointer } => {
                if self.hovered_cards.contains(&id) {
                    out.push(Effect::CardTransform {
                        id,
                        tilt: card_tilt(card, pointer),
                        hovering: true,
                    });
                }
            }
            Event::CardLeave { id } => {
                self.hovered_cards.remove(&id);
                out.push(Effect::CardTransform {
                    id,
                    tilt: Tilt::NEUTRAL,
                    hovering: false,
                });
            }
            Event::CubeEnter { index } => self.set_cube_hover(index, true, &mut out),
            Event::CubeLeave { index } => self.set_cube_hover(index, false, &mut out),
            Event::UseCaseClicked { id, now } => {
                self.active_use_case = Some(id);
                out.push(Effect::UseCaseSelected(id));
                self.schedule(now + USE_CASE_SETTLE, TimerAction::SettleUseCase(id));
            }
            Event::NavigateTo { section } => out.push(Effect::ScrollToSection(section)),
            Event::SectionReached { section } => self.active_section = Some(section),
            Event::Key { key, ctrl, now } => {
                if let Some(shortcut) = keys::shortcut_for(&key, ctrl) {
                    self.on_shortcut(shortcut, now, &mut out);
                }
            }
            Event::ModalOpenRequested { now } => {
                if self.modal.open(now) {
                    out.push(Effect::InsertModal);
                }
            }
            Event::ModalCloseRequested { now } => {
                if self.modal.request_close(now) {
                    out.push(Effect::HideModal);
                }
            }
        }
        out
    }

    fn schedule(&mut self, due: Duration, action: TimerAction) {
        self.timers.push(Timer { due, action });
    }

    fn cancel_emphasis(&mut self, diagram: Diagram) {
        self.timers.retain(|t| {
            !matches!(t.action, TimerAction::Emphasize { diagram: d, .. } if d == diagram)
        });
    }

    fn schedule_emphasis(&mut self, diagram: Diagram, now: Duration) {
        self.cancel_emphasis(diagram);
        let stagger = diagram.style().stagger();
        for index in 0..self.line_count(diagram) {
            let due = now + stagger * index as u32;
            self.schedule(due, TimerAction::Emphasize { diagram, index });
        }
    }

    fn on_frame(&mut self, now: Duration, out: &mut Effects) {
        let (mut due, pending): (Vec<Timer>, Vec<Timer>) =
            std::mem::take(&mut self.timers)
                .into_iter()
                .partition(|t| t.due <= now);
        self.timers = pending;
        due.sort_by_key(|t| t.due);
        for timer in due {
            match timer.action {
                TimerAction::BuildDiagrams => out.push(Effect::MeasureDiagrams),
                TimerAction::HeroIntro => out.push(Effect::HeroIntro),
                TimerAction::ProtocolRings => out.push(Effect::ProtocolRings),
                TimerAction::Emphasize { diagram, index } => {
                    out.push(Effect::EmphasizeLine { diagram, index })
                }
                TimerAction::SettleUseCase(id) => out.push(Effect::UseCaseSettled {
                    id,
                    active: self.active_use_case == Some(id),
                }),
            }
        }

        if self.resize_debounce.poll(now) {
            out.push(Effect::MeasureDiagrams);
        }

        for (id, anim) in &self.counters {
            out.push(Effect::CounterText {
                id: *id,
                text: anim.text_at(now),
            });
        }
        self.counters.retain(|(_, anim)| !anim.is_done(now));

        match self.modal.poll(now) {
            Some(ModalTransition::Show) => out.push(Effect::ShowModal),
            Some(ModalTransition::Remove) => out.push(Effect::RemoveModal),
            None => {}
        }
    }

    fn push_scroll_frame(&mut self, out: &mut Effects) {
        let frame = scroll::scroll_frame(self.scroll_y, self.cubes.len(), &self.config);
        out.push(Effect::Nav(frame.nav));
        out.push(Effect::Fab(frame.fab));
        for (index, (cube, offset)) in self.cubes.iter_mut().zip(frame.parallax).enumerate() {
            cube.parallax_px = offset;
            out.push(Effect::CubeTransform {
                index,
                transform: cube.transform(),
                hovered: cube.hovered,
            });
        }
    }

    fn set_cube_hover(&mut self, index: usize, hovered: bool, out: &mut Effects) {
        if let Some(cube) = self.cubes.get_mut(index) {
            cube.hovered = hovered;
            out.push(Effect::CubeTransform {
                index,
                transform: cube.transform(),
                hovered,
            });
        }
    }

    fn on_shortcut(&mut self, shortcut: Shortcut, now: Duration, out: &mut Effects) {
        log::debug!("[keys] {:?}", shortcut);
        let sections = &self.config.sections;
        let current = self.active_section.as_deref();
        let target = match shortcut {
            Shortcut::NextSection => keys::next_section(sections, current),
            Shortcut::PreviousSection => keys::previous_section(sections, current),
            Shortcut::Top => self.config.top_section(),
            Shortcut::CloseModal => {
                if self.modal.request_close(now) {
                    out.push(Effect::HideModal);
                }
                return;
            }
        }
        .map(str::to_owned);
        if let Some(section) = target {
            out.push(Effect::ScrollToSection(section));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn started_schedules_intro_in_order() {
        let mut s = PageState::new(PageConfig::default(), 0);
        assert_eq!(
            s.step(Event::Started { now: ms(0) }).into_vec(),
            vec![Effect::ProbeSections]
        );
        assert!(s.step(Event::Frame { now: ms(499) }).is_empty());
        assert_eq!(
            s.step(Event::Frame { now: ms(2500) }).into_vec(),
            vec![
                Effect::MeasureDiagrams,
                Effect::HeroIntro,
                Effect::ProtocolRings
            ]
        );
    }

    #[test]
    fn use_case_settles_according_to_latest_selection() {
        let mut s = PageState::new(PageConfig::default(), 0);
        let (a, b) = (ElementId(1), ElementId(2));
        s.step(Event::UseCaseClicked { id: a, now: ms(0) });
        s.step(Event::UseCaseClicked { id: b, now: ms(50) });
        let fx = s.step(Event::Frame { now: ms(300) }).into_vec();
        assert_eq!(
            fx,
            vec![
                Effect::UseCaseSettled { id: a, active: false },
                Effect::UseCaseSettled { id: b, active: true },
            ]
        );
    }

    #[test]
    fn card_move_ignored_unless_hovering() {
        let mut s = PageState::new(PageConfig::default(), 0);
        let id = ElementId(7);
        let card = Rect::new(0.0, 0.0, 100.0, 100.0);
        let pointer = DVec2::new(10.0, 10.0);
        assert!(s.step(Event::CardMove { id, card, pointer }).is_empty());
        s.step(Event::CardEnter { id });
        assert_eq!(s.step(Event::CardMove { id, card, pointer }).len(), 1);
        s.step(Event::CardLeave { id });
        assert!(s.step(Event::CardMove { id, card, pointer }).is_empty());
    }
}
