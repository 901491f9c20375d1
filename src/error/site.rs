use std::fmt::{ Display, Formatter };

/// Failures the site degrades around. None of these ever reach the visitor.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteError {
    Config(String),
    Dom(String),
    Listener(String),
}

impl Display for SiteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteError::Config(msg) => write!(f, "Config Error: {}", msg),
            SiteError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            SiteError::Listener(msg) => write!(f, "Listener Error: {}", msg),
        }
    }
}

impl std::error::Error for SiteError {}

impl From<serde_json::Error> for SiteError {
    fn from(error: serde_json::Error) -> Self {
        SiteError::Config(error.to_string())
    }
}

impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
