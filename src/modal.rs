use crate::constants::*;
use crate::dom::{self, js_err};
use crate::page::{self, SharedPage};
use page_fx_core::Event;
use web_sys as web;

/// Insert the completion modal and its scoped style block.
pub fn insert(document: &web::Document, page: &SharedPage) -> anyhow::Result<()> {
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no <body>"))?;

    let style = document.create_element("style").map_err(js_err)?;
    style.set_id(MODAL_STYLE_ID);
    style.set_text_content(Some(MODAL_CSS));
    head.append_child(&style).map_err(js_err)?;

    let modal = document.create_element("div").map_err(js_err)?;
    modal.set_id(MODAL_ID);
    modal.set_class_name("completion-modal");
    modal.set_inner_html(MODAL_HTML);
    body.append_child(&modal).map_err(js_err)?;

    for selector in [MODAL_CLOSE, MODAL_OVERLAY] {
        if let Ok(Some(el)) = modal.query_selector(selector) {
            let page = page.clone();
            dom::on_click(&el, move || {
                let now = page::now(&page);
                page::dispatch(&page, Event::ModalCloseRequested { now });
            });
        }
    }
    log::info!("[modal] opened");
    Ok(())
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        dom::add_class(&el, MODAL_SHOW_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        dom::remove_class(&el, MODAL_SHOW_CLASS);
    }
}

pub fn remove(document: &web::Document) {
    for id in [MODAL_ID, MODAL_STYLE_ID] {
        if let Some(el) = document.get_element_by_id(id) {
            el.remove();
        }
    }
    log::info!("[modal] closed");
}
