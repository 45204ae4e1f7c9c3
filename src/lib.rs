#![cfg(target_arch = "wasm32")]
use crate::constants::{section_from_href, FLOATING_CUBES};
use page_fx_core::{Event, PageConfig};
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod constants;
mod diagrams;
mod dom;
mod events;
mod frame;
mod modal;
mod observers;
mod page;

thread_local! {
    /// Set once `init` has wired the page.
    static PAGE: RefCell<Option<page::SharedPage>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-fx starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        if let Some(document) = dom::window_document() {
            events::wire_fallback_navigation(&document);
        }
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let cubes = dom::query_document(&document, FLOATING_CUBES);
    let page = page::PageContext::new(document.clone(), PageConfig::default(), cubes);

    // Visibility observers
    observers::wire_counters(&page)?;
    observers::wire_reveal(&page)?;
    observers::wire_diagrams(&page)?;
    observers::wire_in_view(&document)?;

    // Input wiring
    events::wire_navigation(&page);
    events::wire_scroll(&page);
    events::wire_resize(&page);
    events::wire_global_keydown(&page);
    events::wire_cards(&page);
    events::wire_cubes(&page);
    events::wire_use_cases(&page);

    let now = page::now(&page);
    page::dispatch(&page, Event::Started { now });
    PAGE.with(|slot| *slot.borrow_mut() = Some(page.clone()));
    frame::start_loop(page);

    log::info!("page-fx ready: Ctrl+Up/Down moves between sections, Ctrl+Home jumps to the top");
    Ok(())
}

/// Scroll to a section by selector (`"#solution"`), for inline button handlers.
/// Before setup completes, or if it failed, this falls back to a plain smooth
/// `scrollIntoView`.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(target: &str) {
    let page = PAGE.with(|slot| slot.borrow().clone());
    match (page, section_from_href(target)) {
        (Some(page), Some(section)) => {
            let section = section.to_owned();
            page::dispatch(&page, Event::NavigateTo { section });
        }
        _ => {
            let el = dom::window_document().and_then(|doc| doc.query_selector(target).ok().flatten());
            if let Some(el) = el {
                dom::smooth_scroll_into_view(&el);
            }
        }
    }
}
