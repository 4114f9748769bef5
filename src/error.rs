use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser binding layer. None of them are fatal: callers
/// log and leave the affected feature inactive.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("storage operation failed: {0}")]
    Storage(String),
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(js_message(&value))
    }
}

pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
