//! Visibility-triggered effects: observer options, at-most-once tracking,
//! and the reveal / lazy-load style states.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::collections::HashSet;

use crate::config::PageConfig;
use crate::error::ConfigError;

/// Class added to a deferred image the first time it enters the viewport.
pub const LOADED_CLASS: &str = "loaded";

/// Intersection observer parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserveOptions {
    /// Visible fraction that counts as intersecting.
    pub threshold: f64,
    /// CSS margin applied to the root viewport, if any.
    pub root_margin: Option<String>,
    /// Stop watching an element after it first intersects.
    pub once: bool,
}

impl ObserveOptions {
    #[must_use]
    pub fn counters(cfg: &PageConfig) -> Self {
        Self { threshold: cfg.counter_threshold, root_margin: None, once: true }
    }

    #[must_use]
    pub fn reveal(cfg: &PageConfig) -> Self {
        Self { threshold: cfg.reveal_threshold, root_margin: Some(cfg.reveal_root_margin.clone()), once: false }
    }

    #[must_use]
    pub fn lazy_images() -> Self {
        Self { threshold: 0.0, root_margin: None, once: true }
    }
}

/// Reject a visibility threshold the observer constructor would throw on.
///
/// # Errors
///
/// Returns [`ConfigError::ThresholdOutOfRange`] unless `0 <= value <= 1`.
pub fn check_threshold(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { field, value })
    }
}

/// Reject a root margin that is not one to four `px` or `%` lengths.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidRootMargin`] for unitless or malformed values.
pub fn check_root_margin(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let is_length = |token: &str| {
        token
            .strip_suffix("px")
            .or_else(|| token.strip_suffix('%'))
            .is_some_and(|number| number.parse::<f64>().is_ok_and(f64::is_finite))
    };
    let tokens = value.split_whitespace().collect::<Vec<_>>();
    if (1..=4).contains(&tokens.len()) && tokens.iter().all(|token| is_length(token)) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRootMargin { field, value: value.to_owned() })
    }
}

/// Records which watched elements have already fired.
///
/// Elements are keyed by their index in the selector match list at attach time.
#[derive(Debug, Clone, Default)]
pub struct OnceSet {
    fired: HashSet<usize>,
}

impl OnceSet {
    /// Mark `index` as fired. Returns `true` only the first time.
    pub fn fire(&mut self, index: usize) -> bool {
        self.fired.insert(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fired.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}

/// Inline style values for a reveal-animated element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: String,
}

impl RevealStyle {
    /// Style before the element has been seen: transparent and pushed down.
    #[must_use]
    pub fn hidden(offset_px: f64) -> Self {
        Self { opacity: "0", transform: format!("translateY({offset_px}px)") }
    }

    /// Style once revealed: opaque at its natural position.
    #[must_use]
    pub fn shown() -> Self {
        Self { opacity: "1", transform: "translateY(0)".into() }
    }
}
