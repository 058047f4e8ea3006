//! Controller configuration.
//!
//! Every tunable has a default from [`crate::consts`]. A page can override
//! any subset by embedding a JSON object in
//! `<script type="application/json" id="landing-fx-config">`; missing keys keep
//! their defaults and unknown keys are ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::ConfigError;
use crate::visibility;

/// Id of the optional `<script>` element carrying config overrides.
pub const CONFIG_ELEMENT_ID: &str = "landing-fx-config";

/// CSS selectors forming the contract with the page markup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub header: String,
    pub menu_toggle: String,
    pub nav_menu: String,
    pub nav_links: String,
    pub anchors: String,
    pub counters: String,
    pub reveal: String,
    pub screenshot_wrapper: String,
    pub screenshot: String,
    pub contact_form: String,
    pub orbs: String,
    pub lazy_images: String,
    pub sections: String,
    pub interactive: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: "header".into(),
            menu_toggle: ".mobile-menu-toggle".into(),
            nav_menu: "header nav ul".into(),
            nav_links: "header nav ul a".into(),
            anchors: "a[href^=\"#\"]".into(),
            counters: ".stat-number".into(),
            reveal: ".screen-section, .feature-card, .info-card".into(),
            screenshot_wrapper: ".screenshot-wrapper".into(),
            screenshot: ".screenshot".into(),
            contact_form: "#contact-form".into(),
            orbs: ".gradient-orb".into(),
            lazy_images: "img[loading=\"lazy\"]".into(),
            sections: "section[id]".into(),
            interactive: "a, button, .screenshot-wrapper, input, textarea".into(),
        }
    }
}

/// Ids of the contact form fields, in submission order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Default for ContactFields {
    fn default() -> Self {
        Self {
            name: "name".into(),
            email: "email".into(),
            subject: "subject".into(),
            message: "message".into(),
        }
    }
}

/// All tunables of the page controller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub header_threshold_px: f64,
    pub anchor_offset_px: f64,
    pub nav_section_offset_px: f64,
    pub counter_duration_ms: f64,
    pub counter_frame_ms: f64,
    pub counter_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_offset_px: f64,
    pub lightbox_open_delay_ms: u32,
    pub lightbox_close_ms: u32,
    pub toast_show_delay_ms: u32,
    pub toast_visible_ms: u32,
    pub toast_exit_ms: u32,
    pub parallax_speed_px: f64,
    pub follower_easing: f64,
    pub log_level: String,
    pub selectors: Selectors,
    pub contact_fields: ContactFields,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_threshold_px: consts::HEADER_SCROLL_THRESHOLD_PX,
            anchor_offset_px: consts::ANCHOR_HEADER_OFFSET_PX,
            nav_section_offset_px: consts::NAV_SECTION_OFFSET_PX,
            counter_duration_ms: consts::COUNTER_DURATION_MS,
            counter_frame_ms: consts::COUNTER_FRAME_MS,
            counter_threshold: consts::COUNTER_VISIBILITY_THRESHOLD,
            reveal_threshold: consts::REVEAL_VISIBILITY_THRESHOLD,
            reveal_root_margin: consts::REVEAL_ROOT_MARGIN.into(),
            reveal_offset_px: consts::REVEAL_OFFSET_PX,
            lightbox_open_delay_ms: consts::LIGHTBOX_OPEN_DELAY_MS,
            lightbox_close_ms: consts::LIGHTBOX_CLOSE_TRANSITION_MS,
            toast_show_delay_ms: consts::TOAST_SHOW_DELAY_MS,
            toast_visible_ms: consts::TOAST_VISIBLE_MS,
            toast_exit_ms: consts::TOAST_EXIT_MS,
            parallax_speed_px: consts::PARALLAX_SPEED_PX,
            follower_easing: consts::FOLLOWER_EASING,
            log_level: "info".into(),
            selectors: Selectors::default(),
            contact_fields: ContactFields::default(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the body is not a valid config object,
    /// or the error from [`PageConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values the browser's observer constructor would reject.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range threshold or malformed root margin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        visibility::check_threshold("counter_threshold", self.counter_threshold)?;
        visibility::check_threshold("reveal_threshold", self.reveal_threshold)?;
        visibility::check_root_margin("reveal_root_margin", &self.reveal_root_margin)
    }

    /// The configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
