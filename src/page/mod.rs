//! The page controller: wires browser events to [`PageCore`].
//!
//! ARCHITECTURE
//! ============
//! Each behavior is attached independently by its own `attach` function. A
//! behavior whose markup is absent is skipped; one that fails to attach is
//! logged and the rest still run. All listeners and observers are owned by
//! [`Page`], so dropping it detaches everything.

mod contact;
mod lightbox;
mod menu;
mod observe;
mod pointer;
mod scroll;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::{Document, Event, EventTarget};

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::controller::PageCore;
use crate::dom::{self, Listener};
use crate::error::{ConfigError, PageError};

pub(crate) type Shared = Rc<RefCell<PageCore>>;

type Attach = fn(&mut Page, &Document) -> Result<bool, PageError>;

/// Behaviors in attach order. Order carries no meaning beyond log output.
const BEHAVIORS: [(&str, Attach); 11] = [
    ("header", scroll::attach_header),
    ("mobile-menu", menu::attach),
    ("smooth-anchors", scroll::attach_anchors),
    ("counters", observe::attach_counters),
    ("reveal", observe::attach_reveal),
    ("lightbox", lightbox::attach),
    ("contact-form", contact::attach),
    ("parallax", pointer::attach_parallax),
    ("lazy-images", observe::attach_lazy_images),
    ("active-nav", scroll::attach_active_nav),
    ("cursor", pointer::attach_cursor),
];

pub struct Page {
    core: Shared,
    listeners: Vec<Listener>,
    observers: Vec<observe::Observer>,
    /// Cleared on drop; long-running animation loops poll it.
    alive: Rc<Cell<bool>>,
}

impl Page {
    /// Attach every behavior whose markup is present.
    ///
    /// # Errors
    ///
    /// Returns an error only if there is no document at all.
    pub fn mount(core: PageCore) -> Result<Self, PageError> {
        let document = dom::document()?;
        let mut page = Self {
            core: Rc::new(RefCell::new(core)),
            listeners: Vec::new(),
            observers: Vec::new(),
            alive: Rc::new(Cell::new(true)),
        };

        let mut attached = Vec::new();
        for (name, attach) in BEHAVIORS {
            match attach(&mut page, &document) {
                Ok(true) => attached.push(name),
                Ok(false) => log::debug!("{name}: no matching markup, skipped"),
                Err(err) => log::warn!("{name}: failed to attach: {err}"),
            }
        }
        log::info!("page controller ready ({}/{}): {}", attached.len(), BEHAVIORS.len(), attached.join(", "));
        Ok(page)
    }

    fn config<T>(&self, read: impl FnOnce(&PageConfig) -> T) -> T {
        read(&self.core.borrow().config)
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), PageError> {
        self.listeners.push(Listener::attach(target, event, handler)?);
        Ok(())
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.alive.set(false);
        log::debug!("page controller detached ({} listeners)", self.listeners.len());
    }
}

/// Read config overrides from the page. Falls back to defaults on any problem.
#[must_use]
pub fn load_config() -> (PageConfig, Option<ConfigError>) {
    let Ok(doc) = dom::document() else {
        return (PageConfig::default(), None);
    };
    let raw = doc.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    match raw.as_deref().map(PageConfig::from_json) {
        None => (PageConfig::default(), None),
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (PageConfig::default(), Some(err)),
    }
}
