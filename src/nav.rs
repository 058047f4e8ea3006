//! Active-section navigation highlight.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class marking the navigation item of the section currently in view.
pub const ACTIVE_CLASS: &str = "active";

/// A page section's id and document-relative top offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// Id of the section the page is currently in.
///
/// Scans in document order and keeps the last section whose
/// `top - lead` is at or above `scroll_y`, so later sections win ties.
#[must_use]
pub fn active_section(sections: &[SectionOffset], scroll_y: f64, lead: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - lead {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Whether a navigation link points at the active section.
#[must_use]
pub fn is_active_link(href: Option<&str>, active: Option<&str>) -> bool {
    match (href.and_then(|h| h.strip_prefix('#')), active) {
        (Some(target), Some(id)) => target == id,
        _ => false,
    }
}
