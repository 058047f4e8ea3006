//! Screenshot lightbox overlays.
//!
//! Overlay DOM handles live in a map keyed by [`LightboxId`]; the phase of
//! each overlay lives in the core's [`crate::lightbox::LightboxRegistry`].
//! Per-overlay click listeners are owned by the handle and go away with it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent};

use super::{Page, Shared};
use crate::dom::{self, Listener};
use crate::error::PageError;
use crate::lightbox::{ACTIVE_CLASS, CloseTrigger, LightboxId};

const ESCAPE_KEY: &str = "Escape";

struct Overlay {
    root: Element,
    _listeners: Vec<Listener>,
}

#[derive(Clone)]
struct Lightboxes {
    core: Shared,
    overlays: Rc<RefCell<BTreeMap<LightboxId, Overlay>>>,
    document: Document,
    body: HtmlElement,
    open_delay_ms: u32,
    close_ms: u32,
}

pub(super) fn attach(page: &mut Page, doc: &Document) -> Result<bool, PageError> {
    let (wrapper_sel, image_sel, open_delay_ms, close_ms) = page.config(|c| {
        (
            c.selectors.screenshot_wrapper.clone(),
            c.selectors.screenshot.clone(),
            c.lightbox_open_delay_ms,
            c.lightbox_close_ms,
        )
    });
    let wrappers = dom::query_all(doc, &wrapper_sel)?;
    if wrappers.is_empty() {
        return Ok(false);
    }

    let ctx = Lightboxes {
        core: Rc::clone(&page.core),
        overlays: Rc::new(RefCell::new(BTreeMap::new())),
        document: doc.clone(),
        body: dom::body(doc)?,
        open_delay_ms,
        close_ms,
    };

    for wrapper in wrappers {
        let ctx = ctx.clone();
        let image_sel = image_sel.clone();
        let wrapper_el = wrapper.clone();
        page.listen(&wrapper, "click", move |_| {
            let image = match wrapper_el.query_selector(&image_sel) {
                Ok(found) => found.and_then(|el| el.dyn_ref::<HtmlImageElement>().cloned()),
                Err(err) => {
                    log::warn!("lightbox: {}", PageError::from(err));
                    return;
                }
            };
            match image {
                Some(image) => dom::report("lightbox", open(&ctx, &image)),
                None => log::warn!("lightbox: wrapper has no {image_sel} image"),
            }
        })?;
    }

    // One listener for the whole session, however many overlays get opened.
    page.listen(doc, "keydown", move |event| {
        let is_escape = event.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == ESCAPE_KEY);
        if !is_escape {
            return;
        }
        let closing = ctx.core.borrow_mut().lightboxes.close_all_on_escape();
        for id in closing {
            run_exit(&ctx, id);
        }
    })?;
    Ok(true)
}

fn open(ctx: &Lightboxes, image: &HtmlImageElement) -> Result<(), PageError> {
    let id = ctx.core.borrow_mut().lightboxes.open();
    let overlay = match mount(ctx, id, image) {
        Ok(overlay) => overlay,
        Err(err) => {
            ctx.core.borrow_mut().lightboxes.discard(id);
            release_scroll(ctx);
            return Err(err);
        }
    };
    let root = overlay.root.clone();
    ctx.overlays.borrow_mut().insert(id, overlay);

    let core = Rc::clone(&ctx.core);
    Timeout::new(ctx.open_delay_ms, move || {
        if core.borrow_mut().lightboxes.activate(id) {
            dom::report("lightbox", dom::set_class(&root, ACTIVE_CLASS, true));
        }
    })
    .forget();
    log::debug!("opened lightbox {id:?}");
    Ok(())
}

/// Build the overlay, wire its close controls, and attach it to the page.
/// On failure nothing stays in the document.
fn mount(ctx: &Lightboxes, id: LightboxId, image: &HtmlImageElement) -> Result<Overlay, PageError> {
    let doc = &ctx.document;
    let root = dom::create(doc, "div", "lightbox")?;
    let content = dom::create(doc, "div", "lightbox-content")?;
    let close = dom::create(doc, "span", "lightbox-close")?;
    close.set_text_content(Some("\u{d7}"));
    let full = doc.create_element("img")?;
    full.set_attribute("src", &image.src())?;
    full.set_attribute("alt", &image.alt())?;
    content.append_child(&close)?;
    content.append_child(&full)?;
    root.append_child(&content)?;

    let mut listeners = Vec::with_capacity(2);
    {
        let ctx = ctx.clone();
        listeners.push(Listener::attach(&close, "click", move |_| {
            request_close(&ctx, id, CloseTrigger::CloseButton);
        })?);
    }
    {
        let ctx = ctx.clone();
        let backdrop = EventTarget::from(root.clone());
        listeners.push(Listener::attach(&root, "click", move |event| {
            if event.target().is_some_and(|target| target == backdrop) {
                request_close(&ctx, id, CloseTrigger::Backdrop);
            }
        })?);
    }

    ctx.body.append_child(&root)?;
    if let Err(err) = dom::set_style(&ctx.body, "overflow", "hidden") {
        root.remove();
        return Err(err);
    }
    Ok(Overlay { root, _listeners: listeners })
}

fn request_close(ctx: &Lightboxes, id: LightboxId, trigger: CloseTrigger) {
    if ctx.core.borrow_mut().lightboxes.begin_close(id, trigger) {
        run_exit(ctx, id);
    }
}

/// Start the exit transition of an overlay already marked as closing.
fn run_exit(ctx: &Lightboxes, id: LightboxId) {
    if let Some(overlay) = ctx.overlays.borrow().get(&id) {
        dom::report("lightbox", dom::set_class(&overlay.root, ACTIVE_CLASS, false));
    }
    let ctx = ctx.clone();
    Timeout::new(ctx.close_ms, move || detach(&ctx, id)).forget();
}

fn detach(ctx: &Lightboxes, id: LightboxId) {
    if !ctx.core.borrow_mut().lightboxes.finish_close(id) {
        return;
    }
    let removed = ctx.overlays.borrow_mut().remove(&id);
    if let Some(overlay) = removed {
        overlay.root.remove();
    }
    release_scroll(ctx);
}

/// Restore page scrolling once no overlay is attached.
fn release_scroll(ctx: &Lightboxes) {
    if !ctx.core.borrow().lightboxes.scroll_locked() {
        dom::report("lightbox", dom::set_style(&ctx.body, "overflow", ""));
    }
}
