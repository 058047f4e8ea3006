//! Lightbox overlay lifecycle.
//!
//! Each overlay moves through `Opening → Open → Closing` and is forgotten
//! once detached. The registry does not assume a single overlay: several can
//! coexist, and page scroll stays locked while any of them is attached.
//!
//! Escape is handled by one session-wide listener that asks the registry which
//! overlays are closable, so opening overlays never accumulates key listeners.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use std::collections::BTreeMap;

/// Class that drives the overlay's entrance transition.
pub const ACTIVE_CLASS: &str = "active";

/// Identifies one overlay for the lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LightboxId(u64);

/// Where an overlay is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxPhase {
    /// Attached, waiting for the entrance delay.
    Opening,
    /// Fully shown.
    Open,
    /// Exit transition running; detaches when it completes.
    Closing,
}

/// What asked an overlay to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

#[derive(Debug, Default)]
pub struct LightboxRegistry {
    next_id: u64,
    phases: BTreeMap<LightboxId, LightboxPhase>,
}

impl LightboxRegistry {
    /// Register a newly attached overlay.
    pub fn open(&mut self) -> LightboxId {
        let id = LightboxId(self.next_id);
        self.next_id += 1;
        self.phases.insert(id, LightboxPhase::Opening);
        id
    }

    /// Entrance delay elapsed. Returns `true` if the `active` class should be added.
    ///
    /// An overlay that began closing before its delay elapsed stays inactive.
    pub fn activate(&mut self, id: LightboxId) -> bool {
        match self.phases.get_mut(&id) {
            Some(phase @ LightboxPhase::Opening) => {
                *phase = LightboxPhase::Open;
                true
            }
            _ => false,
        }
    }

    /// Start closing. Returns `true` if the exit transition should start;
    /// closing an overlay that is already closing or gone is a no-op.
    pub fn begin_close(&mut self, id: LightboxId, trigger: CloseTrigger) -> bool {
        match self.phases.get_mut(&id) {
            Some(phase @ (LightboxPhase::Opening | LightboxPhase::Open)) => {
                log::debug!("closing lightbox {id:?} via {trigger:?}");
                *phase = LightboxPhase::Closing;
                true
            }
            _ => false,
        }
    }

    /// Exit transition finished. Returns `true` if the overlay should be detached.
    pub fn finish_close(&mut self, id: LightboxId) -> bool {
        if self.phases.get(&id) == Some(&LightboxPhase::Closing) {
            self.phases.remove(&id);
            true
        } else {
            false
        }
    }

    /// Forget an overlay that failed to attach. Returns `true` if it was registered.
    pub fn discard(&mut self, id: LightboxId) -> bool {
        self.phases.remove(&id).is_some()
    }

    /// Escape pressed: start closing every overlay that is not already closing.
    pub fn close_all_on_escape(&mut self) -> Vec<LightboxId> {
        let closable = self
            .phases
            .iter()
            .filter(|(_, phase)| **phase != LightboxPhase::Closing)
            .map(|(id, _)| *id)
            .collect::<Vec<_>>();
        closable.into_iter().filter(|id| self.begin_close(*id, CloseTrigger::Escape)).collect()
    }

    #[must_use]
    pub fn phase(&self, id: LightboxId) -> Option<LightboxPhase> {
        self.phases.get(&id).copied()
    }

    /// Page scroll is locked while any overlay is attached.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        !self.phases.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}
