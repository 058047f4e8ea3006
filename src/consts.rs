//! Default numeric constants for the page controller.
//!
//! These seed [`crate::config::PageConfig`]; the page may override any of
//! them through its JSON config block.

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset (CSS px) above which the header gets its `scrolled` class.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Height of the fixed header subtracted from anchor scroll targets.
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 100.0;

/// Lead distance for active-section detection in the navigation.
pub const NAV_SECTION_OFFSET_PX: f64 = 200.0;

// ── Counters ────────────────────────────────────────────────────

/// Total ramp time of a stat counter.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Nominal frame interval used to derive the per-frame counter increment.
pub const COUNTER_FRAME_MS: f64 = 16.0;

/// Fraction of a counter that must be visible before it starts.
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Root margin that fires reveals slightly before full entry.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Initial downward offset of a not-yet-revealed element.
pub const REVEAL_OFFSET_PX: f64 = 30.0;

/// Transition applied to revealable elements.
pub const REVEAL_TRANSITION: &str = "opacity 0.8s ease, transform 0.8s ease";

// ── Lightbox ────────────────────────────────────────────────────

/// Delay between attaching an overlay and adding its `active` class.
pub const LIGHTBOX_OPEN_DELAY_MS: u32 = 10;

/// Exit transition length before the overlay is detached.
pub const LIGHTBOX_CLOSE_TRANSITION_MS: u32 = 300;

// ── Toast ───────────────────────────────────────────────────────

/// Delay before a toast slides in.
pub const TOAST_SHOW_DELAY_MS: u32 = 100;

/// Time from creation until a toast starts leaving.
pub const TOAST_VISIBLE_MS: u32 = 3000;

/// Exit transition length before the toast is detached.
pub const TOAST_EXIT_MS: u32 = 300;

/// Text shown in the success toast.
pub const TOAST_SUCCESS_TEXT: &str = "Message sent successfully! We'll get back to you soon.";

// ── Pointer effects ─────────────────────────────────────────────

/// Parallax displacement per orb index, in CSS px at the viewport edge.
pub const PARALLAX_SPEED_PX: f64 = 20.0;

/// Exponential smoothing factor for the cursor follower per frame.
pub const FOLLOWER_EASING: f64 = 0.1;
