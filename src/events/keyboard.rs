use crate::dom;
use crate::page::{self, SharedPage};
use page_fx_core::{shortcut_for, suppresses_default, Event};
use web_sys as web;

/// Ctrl+ArrowDown / Ctrl+ArrowUp step between sections, Ctrl+Home jumps to
/// the top and Escape closes the completion modal.
pub fn handle_global_keydown(ev: &web::KeyboardEvent, page: &SharedPage) {
    let key = ev.key();
    let ctrl = ev.ctrl_key();
    let Some(shortcut) = shortcut_for(&key, ctrl) else {
        return;
    };
    if suppresses_default(shortcut) {
        ev.prevent_default();
    }
    log::info!("[keys] {:?}", shortcut);
    let now = page::now(page);
    page::dispatch(page, Event::Key { key, ctrl, now });
}

pub fn wire_global_keydown(page: &SharedPage) {
    let document = page.borrow().document.clone();
    let page = page.clone();
    dom::listen(&document, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &page);
    });
}
