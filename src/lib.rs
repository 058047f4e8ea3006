//! Interaction layer for the landing page.
//!
//! This crate is compiled to WebAssembly and loaded by a static marketing page.
//! It owns every piece of client-side behavior: header styling on scroll, the
//! mobile menu, smooth anchor scrolling, stat counters, reveal-on-scroll,
//! screenshot lightboxes, the contact form toast, orb parallax, lazy image
//! classes, active navigation highlighting, and the custom cursor. The page's
//! markup and stylesheet are the only other collaborators.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | DOM wiring: attaches each behavior and owns its listeners |
//! | [`controller`] | Testable session state ([`controller::PageCore`]) |
//! | [`dom`] | `web-sys` helpers, listener handles, animation-frame loops |
//! | [`config`] | Tunables and markup selectors, with JSON overrides |
//! | [`header`], [`menu`], [`anchor`], [`nav`] | Scroll and navigation decisions |
//! | [`counter`], [`visibility`] | Counter ramps and visibility-triggered styles |
//! | [`lightbox`], [`contact`] | Overlay and toast lifecycles |
//! | [`parallax`], [`cursor`] | Pointer effects |
//! | [`consts`] | Default numeric constants |

pub mod anchor;
pub mod config;
pub mod consts;
pub mod contact;
pub mod controller;
pub mod counter;
pub mod cursor;
pub mod dom;
pub mod error;
pub mod geom;
pub mod header;
pub mod lightbox;
pub mod menu;
pub mod nav;
pub mod page;
pub mod parallax;
pub mod visibility;

use std::cell::RefCell;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::controller::PageCore;
use crate::page::Page;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Module entry point: configure logging and mount the page controller.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_err) = page::load_config();
    if console_log::init_with_level(config.level()).is_err() {
        log::debug!("logger already installed");
    }
    if let Some(err) = config_err {
        log::warn!("{err}; using defaults");
    }

    match Page::mount(PageCore::new(config)) {
        Ok(page) => PAGE.with(|slot| *slot.borrow_mut() = Some(page)),
        Err(err) => log::error!("page controller failed to start: {err}"),
    }
}

/// Detach every listener and observer. Running animations stop on their next frame.
#[wasm_bindgen]
pub fn stop() {
    PAGE.with(|slot| slot.borrow_mut().take());
}
