//! Crate error type.

/// Failures surfaced while mounting or driving a hook.
///
/// None of these leave a core in an inconsistent state: positions are
/// recomputed from the next input event, so the caller logs and carries on.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// A required element was not found under the hook's root.
    #[error("element not found: {0}")]
    MissingElement(String),
    /// A browser API call returned an exception.
    #[error("browser call failed: {0}")]
    Js(String),
    /// The host-supplied config could not be parsed.
    #[error("invalid hook config: {0}")]
    Config(#[from] serde_json::Error),
    /// The config parsed but holds inconsistent values.
    #[error("invalid hook config: {0}")]
    InvalidConfig(String),
    /// The browser rejected a fullscreen request.
    #[error("fullscreen request rejected: {0}")]
    Fullscreen(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for HookError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<HookError> for wasm_bindgen::JsValue {
    fn from(err: HookError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
