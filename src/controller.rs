//! Page controller state: everything that doesn't touch the DOM.
//!
//! Separated from [`crate::page::Page`] so every behavior's decisions can be
//! tested natively. The DOM layer feeds raw measurements in and applies the
//! returned updates.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::PageConfig;
use crate::contact::{ContactSubmission, LogSink, SubmissionSink, ToastId, ToastRegistry, ToastSchedule};
use crate::counter::CounterRamp;
use crate::cursor::CursorState;
use crate::geom::Point;
use crate::header::HeaderState;
use crate::lightbox::LightboxRegistry;
use crate::menu::MenuState;
use crate::nav::{self, SectionOffset};
use crate::parallax;
use crate::visibility::OnceSet;

/// Session state shared by every page behavior.
pub struct PageCore {
    pub config: PageConfig,
    pub header: HeaderState,
    pub menu: MenuState,
    pub cursor: CursorState,
    pub counters: OnceSet,
    pub lazy_images: OnceSet,
    pub lightboxes: LightboxRegistry,
    pub toasts: ToastRegistry,
    sink: Box<dyn SubmissionSink>,
}

impl Default for PageCore {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}

impl PageCore {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink::default()))
    }

    /// Build a core that delivers contact submissions to `sink`.
    #[must_use]
    pub fn with_sink(config: PageConfig, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            header: HeaderState::new(config.header_threshold_px),
            menu: MenuState::default(),
            cursor: CursorState::new(config.follower_easing),
            counters: OnceSet::default(),
            lazy_images: OnceSet::default(),
            lightboxes: LightboxRegistry::default(),
            toasts: ToastRegistry::default(),
            sink,
            config,
        }
    }

    // --- Scroll ---

    /// Record a scroll offset. Returns whether the header is in its scrolled state.
    pub fn scroll_header(&mut self, scroll_y: f64) -> bool {
        self.header.on_scroll(scroll_y)
    }

    /// Id of the section the navigation should highlight at `scroll_y`.
    #[must_use]
    pub fn active_section(&self, scroll_y: f64, sections: &[SectionOffset]) -> Option<String> {
        nav::active_section(sections, scroll_y, self.config.nav_section_offset_px).map(str::to_owned)
    }

    // --- Pointer ---

    /// Translation of each of `orb_count` orbs for a pointer at `client`.
    #[must_use]
    pub fn parallax(&self, client: Point, viewport_w: f64, viewport_h: f64, orb_count: usize) -> Vec<Point> {
        let normalized = parallax::normalize(client, viewport_w, viewport_h);
        (0..orb_count)
            .map(|index| parallax::orb_offset(index, normalized, self.config.parallax_speed_px))
            .collect()
    }

    /// Track the pointer. Returns the cursor dot's position.
    pub fn move_cursor(&mut self, client: Point) -> Point {
        self.cursor.on_move(client)
    }

    /// One animation frame of the cursor follower.
    pub fn tick_follower(&mut self) -> Point {
        self.cursor.tick()
    }

    // --- Counters ---

    /// A counter became visible. Returns its ramp the first time only.
    pub fn start_counter(&mut self, index: usize, target: i64) -> Option<CounterRamp> {
        if !self.counters.fire(index) {
            return None;
        }
        Some(CounterRamp::new(target, self.config.counter_duration_ms, self.config.counter_frame_ms))
    }

    // --- Contact ---

    /// Deliver a submission and create its acknowledgement toast.
    pub fn submit_contact(&mut self, submission: &ContactSubmission) -> (ToastId, ToastSchedule) {
        self.sink.submit(submission);
        (self.toasts.create(), ToastSchedule::from_config(&self.config))
    }
}
