//! Stat counter ramp.
//!
//! A counter climbs from zero to its target at a constant rate of
//! `target / (duration / frame)` per animation frame. Intermediate frames show
//! the floored running value, the last frame shows the exact target. Every
//! frame carries a trailing `+`.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::error::PageError;

/// Attribute holding a counter's integer target.
pub const TARGET_ATTR: &str = "data-target";

/// Parse a counter's `data-target` value.
///
/// # Errors
///
/// Returns [`PageError::InvalidCounterTarget`] if the attribute is absent or
/// not an integer.
pub fn parse_target(raw: Option<&str>) -> Result<i64, PageError> {
    let invalid = || PageError::InvalidCounterTarget { value: raw.map(str::to_owned) };
    let value = raw.ok_or_else(invalid)?;
    value.trim().parse::<i64>().map_err(|_| invalid())
}

/// One rendered frame of a counter ramp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Frame-by-frame counter ramp from 0 to `target`.
#[derive(Debug, Clone)]
pub struct CounterRamp {
    target: i64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterRamp {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: i64, duration_ms: f64, frame_ms: f64) -> Self {
        let frames = if frame_ms > 0.0 { (duration_ms / frame_ms).max(1.0) } else { 1.0 };
        Self { target, increment: target as f64 / frames, current: 0.0, done: false }
    }

    /// Advance one frame. Once done, every further call repeats the final frame.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn step(&mut self) -> CounterFrame {
        if !self.done {
            self.current += self.increment;
            if self.current < self.target as f64 {
                return CounterFrame { text: format!("{}+", self.current.floor() as i64), done: false };
            }
            self.done = true;
        }
        CounterFrame { text: format!("{}+", self.target), done: true }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }
}
