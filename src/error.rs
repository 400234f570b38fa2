//! Setup errors
//!
//! The background is decoration: callers log these and carry on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("2d canvas context unavailable")]
    NoContext,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("invalid particle config: {0}")]
    InvalidConfig(String),
    #[error("particle config is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FieldError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FieldError::Dom(format!("{value:?}"))
    }
}
