//! Error type shared by the DOM bindings.
//!
//! Nothing here is fatal: `main` logs a failing component to the console and
//! keeps mounting the others.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum PageError {
    #[error("element not found: {0}")]
    MissingElement(&'static str),

    #[error("{element} has no {attribute} attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        if let Some(text) = value.as_string() {
            return PageError::Js(text);
        }
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return PageError::Js(String::from(err.message()));
        }
        let text = js_sys::JSON::stringify(&value)
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_else(|| format!("{value:?}"));
        PageError::Js(text)
    }
}

pub type Result<T> = std::result::Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attribute_message_names_both_parts() {
        let err = PageError::MissingAttribute {
            element: ".view-cert-btn",
            attribute: "data-src",
        };
        assert_eq!(err.to_string(), ".view-cert-btn has no data-src attribute");
    }

    #[test]
    fn config_error_wraps_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PageError = parse.into();
        assert!(err.to_string().starts_with("invalid site config:"));
    }
}
