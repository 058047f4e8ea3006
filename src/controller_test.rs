#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::contact::ToastPhase;
use crate::lightbox::CloseTrigger;

struct SharedSink(Rc<RefCell<Vec<ContactSubmission>>>);

impl SubmissionSink for SharedSink {
    fn submit(&mut self, submission: &ContactSubmission) {
        self.0.borrow_mut().push(submission.clone());
    }
}

fn landing_sections() -> Vec<SectionOffset> {
    [("home", 0.0), ("features", 800.0), ("contact", 1600.0)]
        .into_iter()
        .map(|(id, top)| SectionOffset { id: id.into(), top })
        .collect()
}

// --- Scroll ---

#[test]
fn scroll_near_top_is_unscrolled_home() {
    let mut core = PageCore::default();
    assert!(!core.scroll_header(50.0));
    assert_eq!(core.active_section(50.0, &landing_sections()).as_deref(), Some("home"));
}

#[test]
fn scroll_to_850_highlights_features() {
    let mut core = PageCore::default();
    assert!(core.scroll_header(850.0));
    assert_eq!(core.active_section(850.0, &landing_sections()).as_deref(), Some("features"));
    assert_eq!(core.header.last_scroll(), 850.0);
}

#[test]
fn configured_threshold_is_used() {
    let cfg = PageConfig { header_threshold_px: 600.0, ..PageConfig::default() };
    let mut core = PageCore::new(cfg);
    assert!(!core.scroll_header(500.0));
    assert!(core.scroll_header(601.0));
}

#[test]
fn configured_nav_lead_is_used() {
    let cfg = PageConfig { nav_section_offset_px: 0.0, ..PageConfig::default() };
    let core = PageCore::new(cfg);
    assert_eq!(core.active_section(700.0, &landing_sections()).as_deref(), Some("home"));
}

// --- Pointer ---

#[test]
fn parallax_offsets_scale_with_orb_index() {
    let core = PageCore::default();
    let orbs = core.parallax(Point::new(750.0, 250.0), 1000.0, 1000.0, 2);
    assert_eq!(orbs, vec![Point::new(5.0, -5.0), Point::new(10.0, -10.0)]);
}

#[test]
fn parallax_without_orbs_is_empty() {
    let core = PageCore::default();
    assert!(core.parallax(Point::new(3.0, 4.0), 100.0, 100.0, 0).is_empty());
}

#[test]
fn cursor_dot_tracks_pointer() {
    let mut core = PageCore::default();
    assert_eq!(core.move_cursor(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    assert_eq!(core.cursor.pointer(), Point::new(3.0, 4.0));
}

#[test]
fn follower_lags_pointer() {
    let mut core = PageCore::default();
    core.move_cursor(Point::new(100.0, 100.0));
    let first = core.tick_follower();
    assert!(first.x > 0.0 && first.x < 100.0);
}

// --- Counters ---

#[test]
fn counter_starts_once_per_element() {
    let mut core = PageCore::default();
    assert!(core.start_counter(0, 150).is_some());
    assert!(core.start_counter(0, 150).is_none());
    assert!(core.start_counter(1, 20).is_some());
}

#[test]
fn started_counter_ends_at_target() {
    let mut core = PageCore::default();
    let mut ramp = core.start_counter(0, 150).unwrap();
    let mut last = ramp.step();
    while !last.done {
        last = ramp.step();
    }
    assert_eq!(last.text, "150+");
}

// --- Contact ---

#[test]
fn each_submission_reaches_sink_and_gets_one_toast() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut core = PageCore::with_sink(PageConfig::default(), Box::new(SharedSink(Rc::clone(&seen))));
    let submission = ContactSubmission { name: "Ada".into(), ..ContactSubmission::default() };

    let (first, schedule) = core.submit_contact(&submission);
    let (second, _) = core.submit_contact(&submission);

    assert_eq!(seen.borrow().len(), 2);
    assert_ne!(first, second);
    assert_eq!(core.toasts.live(), 2);
    assert_eq!(core.toasts.phase(first), Some(ToastPhase::Pending));
    assert_eq!(schedule.removed_at_ms(), 3300);
}

// --- Lightbox ---

#[test]
fn lightbox_escape_restores_scroll() {
    let mut core = PageCore::default();
    let id = core.lightboxes.open();
    assert!(core.lightboxes.scroll_locked());
    for closing in core.lightboxes.close_all_on_escape() {
        assert!(core.lightboxes.finish_close(closing));
    }
    assert!(!core.lightboxes.scroll_locked());
    assert!(!core.lightboxes.begin_close(id, CloseTrigger::CloseButton));
}

// --- Menu ---

#[test]
fn menu_toggle_then_link_click_closes() {
    let mut core = PageCore::default();
    core.menu.toggle();
    assert!(core.menu.is_open());
    core.menu.close();
    assert!(!core.menu.is_open());
}
