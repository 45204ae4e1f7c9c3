use crate::constants::*;
use crate::diagrams;
use crate::dom::{self, js_err};
use crate::page::{self, Registry, SharedPage};
use page_fx_core::constants::{
    COUNTER_THRESHOLD, DIAGRAM_THRESHOLD, IN_VIEW_ROOT_MARGIN, REVEAL_ROOT_MARGIN,
    REVEAL_STAGGER_SEC, REVEAL_THRESHOLD,
};
use page_fx_core::{parse_target, Diagram, Event};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe `targets` and call `on_change(element, intersecting)` for every
/// visibility change the browser reports.
fn observe<F>(targets: &[web::Element], threshold: f64, root_margin: &str, mut on_change: F) -> anyhow::Result<()>
where
    F: FnMut(&web::Element, bool) + 'static,
{
    if targets.is_empty() {
        return Ok(());
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_change(&entry.target(), entry.is_intersecting());
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    for target in targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

/// Start each `[data-count]` counter the first time it is half visible.
pub fn wire_counters(page: &SharedPage) -> anyhow::Result<()> {
    let mut counters = Vec::new();
    {
        let mut ctx = page.borrow_mut();
        for el in dom::query_document(&ctx.document, COUNTERS) {
            let raw = el.get_attribute(COUNT_ATTR).unwrap_or_default();
            match parse_target(&raw) {
                Ok(target) => {
                    ctx.registry.register(&el);
                    counters.push(el);
                    log::debug!("[counter] registered target {}", target);
                }
                Err(e) => log::warn!("[counter] skipped: {}", e),
            }
        }
    }
    let page = page.clone();
    observe(&counters, COUNTER_THRESHOLD, "0px", move |el, visible| {
        if !visible {
            return;
        }
        let (Some(id), Some(Ok(target))) = (
            Registry::id_of(el),
            el.get_attribute(COUNT_ATTR).map(|raw| parse_target(&raw)),
        ) else {
            return;
        };
        let now = page::now(&page);
        page::dispatch(&page, Event::CounterVisible { id, target, now });
        dom::add_class(el, COUNTED_CLASS);
    })
}

/// Tag reveal targets with a staggered delay and reveal each once.
pub fn wire_reveal(page: &SharedPage) -> anyhow::Result<()> {
    let targets = {
        let mut ctx = page.borrow_mut();
        let targets = dom::query_document(&ctx.document, REVEAL_TARGETS);
        for (index, el) in targets.iter().enumerate() {
            ctx.registry.register(el);
            dom::add_class(el, REVEAL_PENDING_CLASS);
            let delay = reveal_delay(index, REVEAL_STAGGER_SEC);
            dom::set_styles(el, &[("animation-delay", delay.as_str())]);
        }
        targets
    };
    let page = page.clone();
    observe(&targets, REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, move |el, visible| {
        if let (true, Some(id)) = (visible, Registry::id_of(el)) {
            page::dispatch(&page, Event::RevealVisible { id });
        }
    })
}

/// Emphasise a diagram's lines whenever its section scrolls into view.
pub fn wire_diagrams(page: &SharedPage) -> anyhow::Result<()> {
    let document = page.borrow().document.clone();
    let mut viewports = Vec::new();
    for diagram in Diagram::ALL {
        if let Some(el) = dom::query_one(&document, diagrams::viewport_selector(diagram)) {
            viewports.push(el);
        }
    }
    let page = page.clone();
    observe(&viewports, DIAGRAM_THRESHOLD, "0px", move |el, visible| {
        if !visible {
            return;
        }
        let class_list = el.class_list();
        let diagram = Diagram::ALL.into_iter().find(|d| {
            let selector = diagrams::viewport_selector(*d);
            class_list.contains(selector.trim_start_matches('.'))
        });
        if let Some(diagram) = diagram {
            let now = page::now(&page);
            page::dispatch(&page, Event::DiagramVisible { diagram, now });
        }
    })
}

/// Toggle `in-view` on heavy animation elements near the viewport.
pub fn wire_in_view(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_document(document, IN_VIEW_TARGETS);
    observe(&targets, 0.0, IN_VIEW_ROOT_MARGIN, |el, visible| {
        if visible {
            dom::add_class(el, IN_VIEW_CLASS);
        } else {
            dom::remove_class(el, IN_VIEW_CLASS);
        }
    })
}
