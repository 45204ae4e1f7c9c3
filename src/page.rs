use crate::constants::*;
use crate::{diagrams, dom, modal};
use instant::Instant;
use page_fx_core::{
    constants::NAV_OFFSET_PX, scroll_target, Diagram, Effect, ElementId, Event, FxError,
    PageConfig, PageState,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Maps page elements to the ids the core state refers to.
///
/// Each registered element carries its id in a data attribute so observer
/// callbacks, which only see the raw element, can find it again.
#[derive(Default)]
pub struct Registry {
    elements: Vec<web::Element>,
}

impl Registry {
    pub fn register(&mut self, el: &web::Element) -> ElementId {
        if let Some(id) = Self::id_of(el) {
            return id;
        }
        let id = ElementId(self.elements.len() as u32);
        _ = el.set_attribute(FX_ID_ATTR, &id.0.to_string());
        self.elements.push(el.clone());
        id
    }

    pub fn get(&self, id: ElementId) -> Result<&web::Element, FxError> {
        self.elements
            .get(id.0 as usize)
            .ok_or(FxError::UnknownElement(id.0))
    }

    pub fn id_of(el: &web::Element) -> Option<ElementId> {
        el.get_attribute(FX_ID_ATTR)?.parse().ok().map(ElementId)
    }
}

/// Session-scoped page context shared by every listener.
pub struct PageContext {
    pub state: PageState,
    pub registry: Registry,
    pub document: web::Document,
    pub cubes: Vec<web::Element>,
    pub use_cases: Vec<ElementId>,
    started: Instant,
}

pub type SharedPage = Rc<RefCell<PageContext>>;

impl PageContext {
    pub fn new(document: web::Document, config: PageConfig, cubes: Vec<web::Element>) -> SharedPage {
        Rc::new(RefCell::new(Self {
            state: PageState::new(config, cubes.len()),
            registry: Registry::default(),
            document,
            cubes,
            use_cases: Vec::new(),
            started: Instant::now(),
        }))
    }

    /// Time since the session started.
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }
}

#[inline]
pub fn now(page: &SharedPage) -> Duration {
    page.borrow().now()
}

/// Feed one event through the page state and apply the resulting effects.
///
/// Effects that need fresh measurements answer with follow-up events, which
/// are dispatched after the current batch so no borrow is held across them.
pub fn dispatch(page: &SharedPage, event: Event) {
    let effects = page.borrow_mut().state.step(event);
    if effects.is_empty() {
        return;
    }
    let mut replies = Vec::new();
    {
        let ctx = page.borrow();
        for effect in effects {
            apply(page, &ctx, effect, &mut replies);
        }
    }
    for reply in replies {
        dispatch(page, reply);
    }
}

fn apply(page: &SharedPage, ctx: &PageContext, effect: Effect, replies: &mut Vec<Event>) {
    let doc = &ctx.document;
    match effect {
        Effect::Nav(nav) => {
            if let Some(el) = dom::query_one(doc, MAIN_NAV) {
                dom::set_styles(
                    &el,
                    &[
                        ("background", nav.background()),
                        ("backdrop-filter", nav.backdrop_filter()),
                    ],
                );
            }
        }
        Effect::Fab(fab) => {
            if let Some(el) = dom::query_one(doc, FAB) {
                dom::set_styles(
                    &el,
                    &[
                        ("opacity", fab.opacity()),
                        ("transform", fab.transform()),
                        ("pointer-events", fab.pointer_events()),
                    ],
                );
            }
        }
        Effect::CubeTransform {
            index,
            transform,
            hovered,
        } => {
            if let Some(cube) = ctx.cubes.get(index) {
                let (play_state, shadow) = if hovered {
                    ("paused", CUBE_HOVER_SHADOW)
                } else {
                    ("running", "")
                };
                dom::set_styles(
                    cube,
                    &[
                        ("transform", transform.as_str()),
                        ("animation-play-state", play_state),
                        ("box-shadow", shadow),
                    ],
                );
            }
        }
        Effect::ProbeSections => replies.push(Event::SectionsProbed {
            sections: dom::section_boxes(doc, SECTIONS),
        }),
        Effect::ActivateNav(section) => activate_nav_link(doc, section.as_deref()),
        Effect::ScrollToSection(section) => {
            if scroll_to_section(doc, &section) {
                replies.push(Event::SectionReached { section });
            }
        }
        Effect::MeasureDiagrams => {
            let now = ctx.now();
            for diagram in Diagram::ALL {
                if let Some(layout) = diagrams::measure(doc, diagram) {
                    replies.push(Event::DiagramMeasured {
                        diagram,
                        layout,
                        now,
                    });
                }
            }
        }
        Effect::DrawDiagram { diagram, lines } => {
            if let Err(e) = diagrams::draw(doc, diagram, &lines) {
                log::error!("[diagram] {:?} draw failed: {:?}", diagram, e);
            }
        }
        Effect::EmphasizeLine { diagram, index } => diagrams::emphasize(doc, diagram, index),
        Effect::CounterText { id, text } => {
            with_element(ctx, id, |el| el.set_text_content(Some(&text)));
        }
        Effect::Reveal(id) => with_element(ctx, id, |el| dom::add_class(el, REVEAL_DONE_CLASS)),
        Effect::CardTransform { id, tilt, hovering } => {
            let shadow = if hovering { CARD_HOVER_SHADOW } else { "" };
            let css = tilt.css();
            with_element(ctx, id, |el| {
                dom::set_styles(
                    el,
                    &[
                        ("transform", css.as_str()),
                        ("box-shadow", shadow),
                        ("transition", CARD_TRANSITION),
                    ],
                )
            });
        }
        Effect::UseCaseSelected(id) => {
            for other in &ctx.use_cases {
                with_element(ctx, *other, |el| dom::remove_class(el, "active"));
            }
            with_element(ctx, id, |el| {
                dom::add_class(el, "active");
                dom::set_styles(
                    el,
                    &[
                        ("transform", USE_CASE_PULSE),
                        ("transition", USE_CASE_TRANSITION),
                    ],
                );
            });
        }
        Effect::UseCaseSettled { id, active } => {
            let transform = if active { USE_CASE_SETTLED } else { "" };
            with_element(ctx, id, |el| dom::set_styles(el, &[("transform", transform)]));
        }
        Effect::HeroIntro => {
            if let Some(stats) = dom::query_one(doc, HERO_STATS) {
                dom::set_styles(&stats, &[("opacity", "1"), ("transform", "translateY(0)")]);
            }
            if let Some(body) = doc.body() {
                dom::add_class(&body, LOADED_CLASS);
            }
        }
        Effect::ProtocolRings => {
            for ring in dom::query_document(doc, PROTOCOL_RINGS) {
                dom::set_styles(&ring, &[("animation", PROTOCOL_RING_ANIMATION)]);
            }
        }
        Effect::InsertModal => {
            if let Err(e) = modal::insert(doc, page) {
                log::error!("[modal] insert failed: {:?}", e);
            }
        }
        Effect::ShowModal => modal::show(doc),
        Effect::HideModal => modal::hide(doc),
        Effect::RemoveModal => modal::remove(doc),
    }
}

fn with_element(ctx: &PageContext, id: ElementId, f: impl FnOnce(&web::Element)) {
    match ctx.registry.get(id) {
        Ok(el) => f(el),
        Err(e) => log::debug!("[page] {}", e),
    }
}

fn activate_nav_link(doc: &web::Document, section: Option<&str>) {
    let wanted = section.map(section_href);
    for link in dom::query_document(doc, NAV_LINKS) {
        dom::remove_class(&link, "active");
        if wanted.is_some() && link.get_attribute("href") == wanted {
            dom::add_class(&link, "active");
        }
    }
}

/// Returns false when the document has no such section.
fn scroll_to_section(doc: &web::Document, section: &str) -> bool {
    let Some(target) = doc.get_element_by_id(section) else {
        log::debug!("[nav] no section #{}", section);
        return false;
    };
    let offset_top = target
        .dyn_ref::<web::HtmlElement>()
        .map(|el| el.offset_top() as f64)
        .unwrap_or(0.0);
    dom::smooth_scroll_to(scroll_target(offset_top, NAV_OFFSET_PX));
    activate_nav_link(doc, Some(section));
    true
}
