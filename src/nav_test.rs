use super::*;

fn sections(offsets: &[(&str, f64)]) -> Vec<SectionOffset> {
    offsets.iter().map(|(id, top)| SectionOffset { id: (*id).into(), top: *top }).collect()
}

#[test]
fn middle_section_active_at_850() {
    let s = sections(&[("home", 0.0), ("features", 800.0), ("contact", 1600.0)]);
    assert_eq!(active_section(&s, 850.0, 200.0), Some("features"));
}

#[test]
fn lead_activates_section_early() {
    let s = sections(&[("home", 0.0), ("features", 800.0)]);
    assert_eq!(active_section(&s, 599.0, 200.0), Some("home"));
    assert_eq!(active_section(&s, 600.0, 200.0), Some("features"));
}

#[test]
fn later_sections_win() {
    let s = sections(&[("a", 0.0), ("b", 100.0), ("c", 150.0)]);
    assert_eq!(active_section(&s, 400.0, 200.0), Some("c"));
}

#[test]
fn document_order_beats_offset_order() {
    // Out-of-order offsets: the scan still keeps the last qualifying entry.
    let s = sections(&[("late", 1000.0), ("early", 0.0)]);
    assert_eq!(active_section(&s, 1200.0, 200.0), Some("early"));
}

#[test]
fn nothing_active_above_first_section() {
    let s = sections(&[("intro", 500.0)]);
    assert_eq!(active_section(&s, 0.0, 200.0), None);
}

#[test]
fn no_sections_no_active() {
    assert_eq!(active_section(&[], 300.0, 200.0), None);
}

#[test]
fn link_matches_active_fragment() {
    assert!(is_active_link(Some("#features"), Some("features")));
    assert!(!is_active_link(Some("#contact"), Some("features")));
}

#[test]
fn link_without_fragment_never_matches() {
    assert!(!is_active_link(Some("/blog"), Some("blog")));
    assert!(!is_active_link(None, Some("features")));
    assert!(!is_active_link(Some("#features"), None));
}
