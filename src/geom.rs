/// A point or offset in viewport CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS `translate(..)` value for this offset.
    #[must_use]
    pub fn translate_css(self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}
