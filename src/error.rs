//! Error types shared by the DOM layer.

use wasm_bindgen::{JsCast, JsValue};

/// Failure while attaching or running a page behavior.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// `window` is unavailable (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The document has no `<body>` yet.
    #[error("document has no body")]
    NoBody,

    /// A required element did not match its selector.
    #[error("missing element: {selector}")]
    MissingElement { selector: String },

    /// A counter's `data-target` attribute is absent or not an integer.
    #[error("invalid counter target: {value:?}")]
    InvalidCounterTarget { value: Option<String> },

    /// A browser API call threw.
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        if let Some(text) = value.as_string() {
            return Self::Js(text);
        }
        match value.dyn_ref::<js_sys::Error>() {
            Some(err) => Self::Js(String::from(err.message())),
            None => Self::Js(format!("{value:?}")),
        }
    }
}

/// Failure while reading the page's config override block.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON body could not be parsed into a config.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A visibility threshold outside `0..=1`.
    #[error("{field} must be between 0 and 1, got {value}")]
    ThresholdOutOfRange { field: &'static str, value: f64 },

    /// A root margin the browser would reject.
    #[error("{field} must be one to four px or % lengths, got {value:?}")]
    InvalidRootMargin { field: &'static str, value: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
