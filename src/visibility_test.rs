#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn counter_options_fire_once_at_half_visibility() {
    let opts = ObserveOptions::counters(&PageConfig::default());
    assert_eq!(opts.threshold, 0.5);
    assert_eq!(opts.root_margin, None);
    assert!(opts.once);
}

#[test]
fn reveal_options_use_negative_bottom_margin() {
    let opts = ObserveOptions::reveal(&PageConfig::default());
    assert_eq!(opts.threshold, 0.1);
    assert_eq!(opts.root_margin.as_deref(), Some("0px 0px -50px 0px"));
    assert!(!opts.once);
}

#[test]
fn lazy_options_fire_on_any_intersection() {
    let opts = ObserveOptions::lazy_images();
    assert_eq!(opts.threshold, 0.0);
    assert!(opts.once);
}

#[test]
fn once_set_fires_each_index_once() {
    let mut set = OnceSet::default();
    assert!(set.is_empty());
    assert!(set.fire(3));
    assert!(!set.fire(3));
    assert!(set.fire(0));
    assert!(!set.fire(0));
    assert_eq!(set.len(), 2);
}

#[test]
fn hidden_style_is_transparent_and_offset() {
    let style = RevealStyle::hidden(30.0);
    assert_eq!(style.opacity, "0");
    assert_eq!(style.transform, "translateY(30px)");
}

#[test]
fn shown_style_is_opaque_at_rest() {
    let style = RevealStyle::shown();
    assert_eq!(style.opacity, "1");
    assert_eq!(style.transform, "translateY(0)");
}

#[test]
fn reveal_is_idempotent() {
    assert_eq!(RevealStyle::shown(), RevealStyle::shown());
}

#[test]
fn default_config_passes_validation() {
    assert!(PageConfig::default().validate().is_ok());
}

#[test]
fn reveal_threshold_above_one_is_rejected_at_load() {
    let err = PageConfig::from_json(r#"{"reveal_threshold": 2.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::ThresholdOutOfRange { field: "reveal_threshold", .. }));
}

#[test]
fn negative_counter_threshold_is_rejected_at_load() {
    let err = PageConfig::from_json(r#"{"counter_threshold": -0.1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::ThresholdOutOfRange { field: "counter_threshold", .. }));
}

#[test]
fn threshold_bounds_are_inclusive() {
    assert!(check_threshold("t", 0.0).is_ok());
    assert!(check_threshold("t", 1.0).is_ok());
}

#[test]
fn unitless_root_margin_is_rejected_at_load() {
    let err = PageConfig::from_json(r#"{"reveal_root_margin": "0 0 -50 0"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRootMargin { field: "reveal_root_margin", .. }));
}

#[test]
fn root_margin_accepts_px_and_percent_lengths() {
    assert!(check_root_margin("m", "0px 0px -50px 0px").is_ok());
    assert!(check_root_margin("m", "10%").is_ok());
    assert!(check_root_margin("m", "5px 2.5%").is_ok());
}

#[test]
fn root_margin_rejects_empty_and_excess_tokens() {
    assert!(check_root_margin("m", "").is_err());
    assert!(check_root_margin("m", "1px 1px 1px 1px 1px").is_err());
    assert!(check_root_margin("m", "auto").is_err());
}
