use crate::constants::*;
use crate::dom;
use crate::page::{self, SharedPage};
use page_fx_core::Event;
use web_sys as web;

/// Forward raw scroll events; throttling happens in the page state.
pub fn wire_scroll(page: &SharedPage) {
    let Some(window) = web::window() else {
        return;
    };
    let w = window.clone();
    let page = page.clone();
    dom::listen(&window, "scroll", move |_: web::Event| {
        let scroll_y = w.scroll_y().unwrap_or(0.0);
        let now = page::now(&page);
        page::dispatch(&page, Event::Scroll { scroll_y, now });
    });
}

pub fn wire_resize(page: &SharedPage) {
    let Some(window) = web::window() else {
        return;
    };
    let page = page.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        let now = page::now(&page);
        page::dispatch(&page, Event::Resize { now });
    });
}

/// Nav links, the CTA, the FAB and the next-module button.
pub fn wire_navigation(page: &SharedPage) {
    let document = page.borrow().document.clone();

    for link in dom::query_document(&document, NAV_LINKS) {
        let Some(section) = link
            .get_attribute("href")
            .as_deref()
            .and_then(section_from_href)
            .map(str::to_owned)
        else {
            continue;
        };
        let p = page.clone();
        dom::on_click(&link, move || {
            page::dispatch(
                &p,
                Event::NavigateTo {
                    section: section.clone(),
                },
            );
        });
    }

    if let Some(cta) = dom::query_one(&document, CTA_BUTTON) {
        let p = page.clone();
        dom::on_click(&cta, move || {
            page::dispatch(
                &p,
                Event::NavigateTo {
                    section: CTA_TARGET.to_string(),
                },
            );
        });
    }

    if let Some(fab) = dom::query_one(&document, FAB) {
        let p = page.clone();
        dom::on_click(&fab, move || {
            let top = p.borrow().state.config().top_section().map(str::to_owned);
            if let Some(section) = top {
                page::dispatch(&p, Event::NavigateTo { section });
            }
        });
    }

    if let Some(next) = dom::query_one(&document, NEXT_MODULE_BUTTON) {
        let p = page.clone();
        dom::on_click(&next, move || {
            let now = page::now(&p);
            page::dispatch(&p, Event::ModalOpenRequested { now });
        });
    }
}

/// Minimal navigation used when full setup fails: nav links and the FAB
/// still scroll, without any of the effects.
pub fn wire_fallback_navigation(document: &web::Document) {
    log::info!("falling back to basic navigation");
    for link in dom::query_document(document, NAV_LINKS) {
        let doc = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        dom::on_click(&link, move || {
            if let Some(target) = section_from_href(&href).and_then(|id| doc.get_element_by_id(id)) {
                dom::smooth_scroll_into_view(&target);
            }
        });
    }
    if let Some(fab) = dom::query_one(document, FAB) {
        dom::on_click(&fab, || dom::smooth_scroll_to(0.0));
    }
}
