//! Custom cursor dot and eased follower ring.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::geom::Point;

/// Class applied to both cursor visuals while over an interactive element.
pub const HOVER_CLASS: &str = "hover";

/// Class of the dot that tracks the pointer exactly.
pub const DOT_CLASS: &str = "custom-cursor";

/// Class of the ring that trails the pointer.
pub const FOLLOWER_CLASS: &str = "cursor-follower";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    easing: f64,
    pointer: Point,
    follower: Point,
    hovering: bool,
}

impl CursorState {
    /// Both the pointer and follower start at the viewport origin.
    #[must_use]
    pub fn new(easing: f64) -> Self {
        Self { easing, pointer: Point::default(), follower: Point::default(), hovering: false }
    }

    /// Record a pointer move. Returns the dot's new position.
    pub fn on_move(&mut self, pointer: Point) -> Point {
        self.pointer = pointer;
        pointer
    }

    /// Advance the follower one animation frame toward the pointer.
    pub fn tick(&mut self) -> Point {
        self.follower.x += (self.pointer.x - self.follower.x) * self.easing;
        self.follower.y += (self.pointer.y - self.follower.y) * self.easing;
        self.follower
    }

    /// Returns `true` if the hover state changed.
    pub fn set_hover(&mut self, hovering: bool) -> bool {
        let changed = self.hovering != hovering;
        self.hovering = hovering;
        changed
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    #[must_use]
    pub fn follower(&self) -> Point {
        self.follower
    }
}
