use crate::constants::*;
use crate::dom;
use crate::page::{self, SharedPage};
use glam::DVec2;
use page_fx_core::{cube_animation_delay, Event};
use web_sys as web;

/// 3D tilt on cards: lift on enter, follow the pointer, settle on leave.
pub fn wire_cards(page: &SharedPage) {
    let cards = {
        let mut ctx = page.borrow_mut();
        let cards = dom::query_document(&ctx.document, TILT_CARDS);
        cards
            .into_iter()
            .map(|el| {
                let id = ctx.registry.register(&el);
                (el, id)
            })
            .collect::<Vec<_>>()
    };
    for (card, id) in cards {
        let p = page.clone();
        dom::listen(&card, "mouseenter", move |_: web::MouseEvent| {
            page::dispatch(&p, Event::CardEnter { id });
        });

        let p = page.clone();
        let el = card.clone();
        dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
            let pointer = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
            let rect = dom::rect_of(&el);
            page::dispatch(
                &p,
                Event::CardMove {
                    id,
                    card: rect,
                    pointer,
                },
            );
        });

        let p = page.clone();
        dom::listen(&card, "mouseleave", move |_: web::MouseEvent| {
            page::dispatch(&p, Event::CardLeave { id });
        });
    }
}

/// Stagger cube float animations and pause them under the pointer.
pub fn wire_cubes(page: &SharedPage) {
    let cubes = page.borrow().cubes.clone();
    for (index, cube) in cubes.iter().enumerate() {
        let delay = cube_animation_delay(index);
        dom::set_styles(cube, &[("animation-delay", delay.as_str())]);

        let p = page.clone();
        dom::listen(cube, "mouseenter", move |_: web::MouseEvent| {
            page::dispatch(&p, Event::CubeEnter { index });
        });
        let p = page.clone();
        dom::listen(cube, "mouseleave", move |_: web::MouseEvent| {
            page::dispatch(&p, Event::CubeLeave { index });
        });
    }
}

/// Single-selection use-case cards.
pub fn wire_use_cases(page: &SharedPage) {
    let cards = {
        let mut ctx = page.borrow_mut();
        let cards = dom::query_document(&ctx.document, USE_CASE_CARDS);
        let ids: Vec<_> = cards.iter().map(|el| ctx.registry.register(el)).collect();
        ctx.use_cases = ids.clone();
        cards.into_iter().zip(ids).collect::<Vec<_>>()
    };
    for (card, id) in cards {
        let p = page.clone();
        dom::listen(&card, "click", move |_: web::MouseEvent| {
            let now = page::now(&p);
            page::dispatch(&p, Event::UseCaseClicked { id, now });
        });
    }
}
