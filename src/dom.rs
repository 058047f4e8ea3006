//! Thin helpers over `web-sys` used by the page behaviors.
//!
//! Every fallible browser call is surfaced as a [`PageError`] so behaviors can
//! propagate with `?` and the controller decides what to log.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::PageError;

/// The global window.
///
/// # Errors
///
/// Returns [`PageError::NoWindow`] outside a browser main thread.
pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

/// The window's document.
///
/// # Errors
///
/// Returns an error if there is no window or it has no document.
pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

/// The document body.
///
/// # Errors
///
/// Returns [`PageError::NoBody`] before `<body>` is parsed.
pub fn body(doc: &Document) -> Result<HtmlElement, PageError> {
    doc.body().ok_or(PageError::NoBody)
}

/// First element matching `selector`, if any.
///
/// # Errors
///
/// Returns an error if `selector` is not valid CSS.
pub fn query(doc: &Document, selector: &str) -> Result<Option<Element>, PageError> {
    Ok(doc.query_selector(selector)?)
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns an error if `selector` is not valid CSS.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let nodes = doc.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// Add or remove a class.
///
/// # Errors
///
/// Returns an error if the class name is not a valid token.
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), PageError> {
    let list = el.class_list();
    if on {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Set an inline style property. Non-HTML elements (e.g. SVG) are skipped.
///
/// # Errors
///
/// Returns an error if the browser rejects the property.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), PageError> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

/// Create an element with the given class attribute.
///
/// # Errors
///
/// Returns an error if `tag` is not a valid element name.
pub fn create(doc: &Document, tag: &str, class: &str) -> Result<Element, PageError> {
    let el = doc.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

/// Vertical page offset, or `0` if the browser refuses to report it.
#[must_use]
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Viewport size in CSS pixels, `(0, 0)` if unavailable.
#[must_use]
pub fn viewport(window: &Window) -> (f64, f64) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| v.map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Log a failed DOM update from inside an event handler.
pub fn report(behavior: &str, result: Result<(), PageError>) {
    if let Err(err) = result {
        log::warn!("{behavior}: {err}");
    }
}

// ── Listeners ──────────────────────────────────────────────────

/// An attached event listener. Dropping it detaches the listener.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser rejects the registration.
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, PageError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("detaching {} listener failed: {}", self.event, PageError::from(err));
        }
    }
}

// ── Animation frames ───────────────────────────────────────────

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Run `frame` now and then once per animation frame until it returns `false`.
///
/// # Errors
///
/// Returns an error if there is no window or the first frame cannot be scheduled.
pub fn animation_loop(mut frame: impl FnMut() -> bool + 'static) -> Result<(), PageError> {
    if !frame() {
        return Ok(());
    }
    let window = window()?;
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let slot_for_cb = Rc::clone(&slot);
    let window_for_cb = window.clone();
    let callback = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
        if frame() {
            match request_frame(&window_for_cb, &slot_for_cb) {
                Ok(()) => return,
                Err(err) => log::warn!("animation loop stopped: {err}"),
            }
        }
        // Releases this closure once the current call returns.
        slot_for_cb.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(callback);
    if let Err(err) = request_frame(&window, &slot) {
        slot.borrow_mut().take();
        return Err(err);
    }
    Ok(())
}

fn request_frame(window: &Window, slot: &FrameSlot) -> Result<(), PageError> {
    let held = slot.borrow();
    let callback = held.as_ref().ok_or_else(|| PageError::Js("animation frame callback released".into()))?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}
