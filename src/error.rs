//! Error type for the page-facing layer
//!
//! Aggregation and tree building never fail; only locating page elements
//! and talking to the DOM can.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum TagCloudError {
    /// No element matched the selector
    MissingElement(String),
    /// Element matched but has the wrong type (e.g. search bar is not an `<input>`)
    WrongElementType { selector: String, expected: &'static str },
    NoWindow,
    NoDocument,
    /// A DOM call threw
    Dom(String),
    InvalidConfig(String),
}

impl std::fmt::Display for TagCloudError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagCloudError::MissingElement(selector) => {
                write!(f, "No element matches selector: {}", selector)
            }
            TagCloudError::WrongElementType { selector, expected } => {
                write!(f, "Element '{}' is not a {}", selector, expected)
            }
            TagCloudError::NoWindow => write!(f, "No global window"),
            TagCloudError::NoDocument => write!(f, "Window has no document"),
            TagCloudError::Dom(msg) => write!(f, "DOM error: {}", msg),
            TagCloudError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for TagCloudError {}

impl From<TagCloudError> for JsValue {
    fn from(err: TagCloudError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl TagCloudError {
    /// Wrap a thrown JS value
    pub fn from_js(value: JsValue) -> Self {
        TagCloudError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
