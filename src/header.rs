//! Scroll-reactive header state.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Class applied to the header once the page has scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Tracks the last scroll offset and whether the header is in its scrolled state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    threshold: f64,
    last_scroll: f64,
}

impl HeaderState {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, last_scroll: 0.0 }
    }

    /// Record a scroll offset and return whether the header should be `scrolled`.
    ///
    /// Negative offsets (overscroll bounce on some platforms) are clamped to zero.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.last_scroll = offset.max(0.0);
        self.is_scrolled()
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.last_scroll > self.threshold
    }

    #[must_use]
    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }
}
