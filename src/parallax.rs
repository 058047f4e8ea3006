//! Pointer-driven parallax for decorative orbs.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::geom::Point;

/// Pointer position as a fraction of the viewport in each axis.
///
/// A zero or negative viewport dimension maps to the center (`0.5`).
#[must_use]
pub fn normalize(client: Point, viewport_w: f64, viewport_h: f64) -> Point {
    let axis = |pos: f64, len: f64| if len > 0.0 { pos / len } else { 0.5 };
    Point::new(axis(client.x, viewport_w), axis(client.y, viewport_h))
}

/// Translation of the orb at `index` for a normalized pointer position.
///
/// Deeper orbs (higher index) move further: `(n - 0.5) * (index + 1) * speed`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn orb_offset(index: usize, normalized: Point, speed: f64) -> Point {
    let depth = (index + 1) as f64 * speed;
    Point::new((normalized.x - 0.5) * depth, (normalized.y - 0.5) * depth)
}
