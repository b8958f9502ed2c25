//! Error type for the browser bindings.
//!
//! Nothing here reaches the visitor: a failing feature is logged and skipped.

/// Errors raised while attaching decorations to the page
#[derive(Debug, thiserror::Error)]
pub enum DecorError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DecorError>;

impl From<serde_json::Error> for DecorError {
    fn from(err: serde_json::Error) -> Self {
        DecorError::Config(err.to_string())
    }
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for DecorError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        DecorError::Js(message)
    }
}

#[cfg(feature = "csr")]
impl From<serde_wasm_bindgen::Error> for DecorError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        DecorError::Config(err.to_string())
    }
}
