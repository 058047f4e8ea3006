//! Contact form submission and the success toast.
//!
//! The page has no backend: a submission is handed to a [`SubmissionSink`]
//! and acknowledged with a toast. The default sink only writes the submission
//! to the diagnostic log. A deployment that wants real delivery supplies its
//! own sink.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::PageConfig;

/// Class toggled on a toast while it is on screen.
pub const SHOW_CLASS: &str = "show";

/// Values read from the four contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Destination for contact form submissions.
pub trait SubmissionSink {
    fn submit(&mut self, submission: &ContactSubmission);
}

/// Logs each submission as JSON and sends nothing anywhere.
#[derive(Debug, Default)]
pub struct LogSink {
    submitted: usize,
}

impl LogSink {
    /// Number of submissions seen this session.
    #[must_use]
    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

impl SubmissionSink for LogSink {
    fn submit(&mut self, submission: &ContactSubmission) {
        self.submitted += 1;
        match serde_json::to_string(submission) {
            Ok(json) => log::info!("form submission #{}: {json}", self.submitted),
            Err(err) => log::warn!("form submission #{} (unserializable: {err})", self.submitted),
        }
    }
}

/// Millisecond offsets, from creation, of a toast's transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSchedule {
    /// Add the `show` class.
    pub show_at_ms: u32,
    /// Remove the `show` class.
    pub hide_at_ms: u32,
    /// Delay after hiding before the toast is detached.
    pub remove_after_hide_ms: u32,
}

impl ToastSchedule {
    #[must_use]
    pub fn from_config(cfg: &PageConfig) -> Self {
        Self {
            show_at_ms: cfg.toast_show_delay_ms,
            hide_at_ms: cfg.toast_visible_ms,
            remove_after_hide_ms: cfg.toast_exit_ms,
        }
    }

    /// Offset from creation at which the toast leaves the document.
    #[must_use]
    pub fn removed_at_ms(&self) -> u32 {
        self.hide_at_ms.saturating_add(self.remove_after_hide_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Attached, off screen.
    Pending,
    /// Slid in.
    Shown,
    /// Sliding out; detaches when done.
    Leaving,
}

/// Live toasts, one per submission.
#[derive(Debug, Default)]
pub struct ToastRegistry {
    next_id: u64,
    phases: BTreeMap<ToastId, ToastPhase>,
}

impl ToastRegistry {
    pub fn create(&mut self) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.phases.insert(id, ToastPhase::Pending);
        id
    }

    /// Returns `true` if the toast moved from pending to shown.
    pub fn show(&mut self, id: ToastId) -> bool {
        self.advance(id, ToastPhase::Pending, ToastPhase::Shown)
    }

    /// Returns `true` if the toast started leaving.
    pub fn hide(&mut self, id: ToastId) -> bool {
        match self.phases.get_mut(&id) {
            Some(phase @ (ToastPhase::Pending | ToastPhase::Shown)) => {
                *phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if a leaving toast should now be detached.
    pub fn remove(&mut self, id: ToastId) -> bool {
        if self.phases.get(&id) == Some(&ToastPhase::Leaving) {
            self.phases.remove(&id);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        self.phases.get(&id).copied()
    }

    #[must_use]
    pub fn live(&self) -> usize {
        self.phases.len()
    }

    fn advance(&mut self, id: ToastId, from: ToastPhase, to: ToastPhase) -> bool {
        match self.phases.get_mut(&id) {
            Some(phase) if *phase == from => {
                *phase = to;
                true
            }
            _ => false,
        }
    }
}
