//! Mobile navigation toggle wiring.

use std::rc::Rc;

use web_sys::{Document, Element};

use super::Page;
use crate::dom;
use crate::error::PageError;
use crate::menu::{Glyph, OPEN_CLASS};

pub(super) fn attach(page: &mut Page, doc: &Document) -> Result<bool, PageError> {
    let (toggle_sel, menu_sel, links_sel) = page.config(|c| {
        (c.selectors.menu_toggle.clone(), c.selectors.nav_menu.clone(), c.selectors.nav_links.clone())
    });
    let (Some(toggle), Some(menu)) = (dom::query(doc, &toggle_sel)?, dom::query(doc, &menu_sel)?) else {
        return Ok(false);
    };

    {
        let core = Rc::clone(&page.core);
        let (toggle_el, menu) = (toggle.clone(), menu.clone());
        page.listen(&toggle, "click", move |_| {
            let glyph = core.borrow_mut().menu.toggle();
            dom::report("mobile-menu", render(&toggle_el, &menu, glyph));
        })?;
    }

    for link in dom::query_all(doc, &links_sel)? {
        let core = Rc::clone(&page.core);
        let (toggle_el, menu) = (toggle.clone(), menu.clone());
        page.listen(&link, "click", move |_| {
            let glyph = core.borrow_mut().menu.close();
            dom::report("mobile-menu", render(&toggle_el, &menu, glyph));
        })?;
    }
    Ok(true)
}

fn render(toggle: &Element, menu: &Element, glyph: Glyph) -> Result<(), PageError> {
    dom::set_class(menu, OPEN_CLASS, glyph == Glyph::Times)?;
    if let Some(icon) = toggle.query_selector("i")? {
        dom::set_class(&icon, glyph.other_class(), false)?;
        dom::set_class(&icon, glyph.class(), true)?;
    }
    Ok(())
}
