//! Same-page anchor resolution for smooth scrolling.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Extract the fragment id from a same-page link (`"#pricing"` → `"pricing"`).
///
/// A bare `#` and anything that is not a fragment link yield `None`.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Document-relative scroll position that puts a target just below the fixed header.
///
/// `rect_top` is the target's viewport-relative top edge, `scroll_y` the current
/// page offset. The result never goes above the top of the document.
#[must_use]
pub fn scroll_target(rect_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (rect_top + scroll_y - header_offset).max(0.0)
}
