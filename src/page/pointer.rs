//! Pointer-driven behaviors: orb parallax and the custom cursor.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent};

use super::Page;
use crate::cursor::{DOT_CLASS, FOLLOWER_CLASS, HOVER_CLASS};
use crate::dom;
use crate::error::PageError;
use crate::geom::Point;

fn client_point(event: &Event) -> Option<Point> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

pub(super) fn attach_parallax(page: &mut Page, doc: &Document) -> Result<bool, PageError> {
    let selector = page.config(|c| c.selectors.orbs.clone());
    let orbs = dom::query_all(doc, &selector)?;
    if orbs.is_empty() {
        return Ok(false);
    }
    let window = dom::window()?;
    let core = Rc::clone(&page.core);
    let win = window.clone();
    page.listen(&window, "mousemove", move |event| {
        let Some(client) = client_point(&event) else {
            return;
        };
        let (width, height) = dom::viewport(&win);
        let offsets = core.borrow().parallax(client, width, height, orbs.len());
        for (orb, offset) in orbs.iter().zip(offsets) {
            dom::report("parallax", dom::set_style(orb, "transform", &offset.translate_css()));
        }
    })?;
    Ok(true)
}

pub(super) fn attach_cursor(page: &mut Page, doc: &Document) -> Result<bool, PageError> {
    let body = dom::body(doc)?;
    let dot = dom::create(doc, "div", DOT_CLASS)?;
    let follower = dom::create(doc, "div", FOLLOWER_CLASS)?;
    body.append_child(&dot)?;
    body.append_child(&follower)?;

    {
        let core = Rc::clone(&page.core);
        let dot = dot.clone();
        page.listen(doc, "mousemove", move |event| {
            if let Some(client) = client_point(&event) {
                let at = core.borrow_mut().move_cursor(client);
                dom::report("cursor", dom::set_style(&dot, "transform", &at.translate_css()));
            }
        })?;
    }

    {
        let core = Rc::clone(&page.core);
        let alive = Rc::clone(&page.alive);
        let follower = follower.clone();
        dom::animation_loop(move || {
            let at = core.borrow_mut().tick_follower();
            dom::report("cursor", dom::set_style(&follower, "transform", &at.translate_css()));
            alive.get()
        })?;
    }

    let selector = page.config(|c| c.selectors.interactive.clone());
    for el in dom::query_all(doc, &selector)? {
        for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let core = Rc::clone(&page.core);
            let visuals = [dot.clone(), follower.clone()];
            page.listen(&el, event, move |_| {
                if core.borrow_mut().cursor.set_hover(hovering) {
                    dom::report("cursor", set_hover(&visuals, hovering));
                }
            })?;
        }
    }
    Ok(true)
}

fn set_hover(visuals: &[Element], hovering: bool) -> Result<(), PageError> {
    for el in visuals {
        dom::set_class(el, HOVER_CLASS, hovering)?;
    }
    Ok(())
}
