//! Visibility-driven behaviors built on `IntersectionObserver`.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Page;
use crate::consts::REVEAL_TRANSITION;
use crate::counter::{self, TARGET_ATTR};
use crate::dom;
use crate::error::PageError;
use crate::visibility::{LOADED_CLASS, ObserveOptions, RevealStyle};

/// A live observer. Dropping it disconnects every watched element.
pub(crate) struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl Observer {
    /// Build an observer for `targets` that calls `on_visible(index, element)`
    /// when one intersects. Nothing is watched until [`Observer::watch`].
    fn new(
        targets: &[Element],
        options: &ObserveOptions,
        mut on_visible: impl FnMut(usize, &Element) + 'static,
    ) -> Result<Self, PageError> {
        let once = options.once;
        let watched = targets.to_vec();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if once {
                        observer.unobserve(&target);
                    }
                    if let Some(index) = watched.iter().position(|el| *el == target) {
                        on_visible(index, &target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = options.root_margin.as_deref() {
            init.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self { observer, _callback: callback })
    }

    fn watch(&self, targets: &[Element]) {
        for target in targets {
            self.observer.observe(target);
        }
    }
}

/// Watch `targets` for the lifetime of the page.
fn observe(
    page: &mut Page,
    targets: &[Element],
    options: &ObserveOptions,
    on_visible: impl FnMut(usize, &Element) + 'static,
) -> Result<(), PageError> {
    let observer = Observer::new(targets, options, on_visible)?;
    observer.watch(targets);
    page.observers.push(observer);
    Ok(())
}

pub(super) fn attach_counters(page: &mut Page, doc: &Document) -> Result<bool, PageError> {
    let (selector, options) = page.config(|c| (c.selectors.counters.clone(), ObserveOptions::counters(c)));
    let mut elements = Vec::new();
    let mut targets = Vec::new();
    for el in dom::query_all(doc, &selector)? {
        match counter::parse_target(el.get_attribute(TARGET_ATTR).as_deref()) {
            Ok(target) => {
                elements.push(el);
                targets.push(target);
            }
            Err(err) => log::warn!("counters: skipping element: {err}"),
        }
    }
    if elements.is_empty() {
        return Ok(false);
    }

    let core = Rc::clone(&page.core);
    observe(page, &elements, &options, move |index, el| {
        let Some(target) = targets.get(index).copied() else {
            return;
        };
        let Some(mut ramp) = core.borrow_mut().start_counter(index, target) else {
            return;
        };
        let el = el.clone();
        let started = dom::animation_loop(move || {
            let frame = ramp.step();
            el.set_text_content(Some(&frame.text));
            !frame.done
        });
        dom::report("counters", started);
    })?;
    Ok(true)
}

pub(super) fn attach_reveal(page: &mut Page, doc: &Document) -> Result<bool, PageError> {
    let (selector, options, offset) =
        page.config(|c| (c.selectors.reveal.clone(), ObserveOptions::reveal(c), c.reveal_offset_px));
    let elements = dom::query_all(doc, &selector)?;
    if elements.is_empty() {
        return Ok(false);
    }

    // Content is only hidden once something exists that can show it again.
    let observer = Observer::new(&elements, &options, |_, el| {
        dom::report("reveal", apply_reveal(el, &RevealStyle::shown()));
    })?;
    let hidden = RevealStyle::hidden(offset);
    for el in &elements {
        let hidden_now = apply_reveal(el, &hidden).and_then(|()| dom::set_style(el, "transition", REVEAL_TRANSITION));
        if let Err(err) = hidden_now {
            for el in &elements {
                dom::report("reveal", clear_reveal(el));
            }
            return Err(err);
        }
    }
    observer.watch(&elements);
    page.observers.push(observer);
    Ok(true)
}

fn apply_reveal(el: &Element, style: &RevealStyle) -> Result<(), PageError> {
    dom::set_style(el, "opacity", style.opacity)?;
    dom::set_style(el, "transform", &style.transform)
}

/// Drop the inline reveal styles so the stylesheet decides again.
fn clear_reveal(el: &Element) -> Result<(), PageError> {
    for property in ["opacity", "transform", "transition"] {
        dom::set_style(el, property, "")?;
    }
    Ok(())
}

pub(super) fn attach_lazy_images(page: &mut Page, doc: &Document) -> Result<bool, PageError> {
    let selector = page.config(|c| c.selectors.lazy_images.clone());
    let images = dom::query_all(doc, &selector)?;
    if images.is_empty() {
        return Ok(false);
    }

    let core = Rc::clone(&page.core);
    observe(page, &images, &ObserveOptions::lazy_images(), move |index, el| {
        if core.borrow_mut().lazy_images.fire(index) {
            dom::report("lazy-images", dom::set_class(el, LOADED_CLASS, true));
        }
    })?;
    Ok(true)
}
