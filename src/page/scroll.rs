//! Scroll-driven behaviors: header state, smooth anchors, active navigation.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::Page;
use crate::anchor;
use crate::dom;
use crate::error::PageError;
use crate::header::SCROLLED_CLASS;
use crate::nav::{self, SectionOffset};

pub(super) fn attach_header(page: &mut Page, doc: &Document) -> Result<bool, PageError> {
    let selector = page.config(|c| c.selectors.header.clone());
    let Some(header) = dom::query(doc, &selector)? else {
        return Ok(false);
    };
    let window = dom::window()?;
    let core = Rc::clone(&page.core);
    let win = window.clone();
    page.listen(&window, "scroll", move |_| {
        let scrolled = core.borrow_mut().scroll_header(dom::scroll_y(&win));
        dom::report("header", dom::set_class(&header, SCROLLED_CLASS, scrolled));
    })?;
    Ok(true)
}

pub(super) fn attach_anchors(page: &mut Page, doc: &Document) -> Result<bool, PageError> {
    let selector = page.config(|c| c.selectors.anchors.clone());
    let anchors = dom::query_all(doc, &selector)?;
    if anchors.is_empty() {
        return Ok(false);
    }
    let window = dom::window()?;
    for anchor_el in anchors {
        let core = Rc::clone(&page.core);
        let win = window.clone();
        let document = doc.clone();
        let link = anchor_el.clone();
        page.listen(&anchor_el, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href");
            let Some(target) = href.as_deref().and_then(anchor::fragment_id).and_then(|id| document.get_element_by_id(id))
            else {
                return;
            };
            let offset = core.borrow().config.anchor_offset_px;
            let top = anchor::scroll_target(target.get_bounding_client_rect().top(), dom::scroll_y(&win), offset);
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(true)
}

pub(super) fn attach_active_nav(page: &mut Page, doc: &Document) -> Result<bool, PageError> {
    let (section_sel, link_sel) = page.config(|c| (c.selectors.sections.clone(), c.selectors.nav_links.clone()));
    let sections = dom::query_all(doc, &section_sel)?;
    let links = dom::query_all(doc, &link_sel)?;
    if sections.is_empty() || links.is_empty() {
        return Ok(false);
    }
    let window = dom::window()?;
    let core = Rc::clone(&page.core);
    let win = window.clone();
    page.listen(&window, "scroll", move |_| {
        let offsets = section_offsets(&sections);
        let active = core.borrow().active_section(dom::scroll_y(&win), &offsets);
        for link in &links {
            let on = nav::is_active_link(link.get_attribute("href").as_deref(), active.as_deref());
            dom::report("active-nav", highlight(link, on));
        }
    })?;
    Ok(true)
}

/// Section ids with their current document-relative tops. Layout can shift,
/// so offsets are read on every scroll.
fn section_offsets(sections: &[Element]) -> Vec<SectionOffset> {
    sections
        .iter()
        .map(|section| SectionOffset {
            id: section.id(),
            top: section.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top())),
        })
        .collect()
}

/// The highlight lives on the link's list item when it has one.
fn highlight(link: &Element, on: bool) -> Result<(), PageError> {
    let item = link.query_selector("li")?.unwrap_or_else(|| link.clone());
    dom::set_class(&item, nav::ACTIVE_CLASS, on)
}
