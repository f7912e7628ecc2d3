// src/error.rs
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("element #{id} not found")]
    ElementNotFound { id: String },

    #[error("element #{id} is not an {expected}")]
    UnexpectedElement { id: String, expected: &'static str },

    #[error("invalid selector: {selector}")]
    InvalidSelector { selector: String },

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("no document available")]
    NoDocument,

    #[error("invalid UI configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl UiError {
    pub fn not_found(id: &str) -> Self {
        UiError::ElementNotFound { id: id.to_string() }
    }

    /// Wrap an exception thrown by a `web_sys` call.
    pub fn dom(err: JsValue) -> Self {
        UiError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
