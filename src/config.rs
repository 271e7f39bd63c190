//! Hook tunables supplied by the host page.
//!
//! The page may pass a JSON object when mounting hooks; every field is
//! optional and falls back to the constants in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::camera::ZoomBounds;
use crate::consts::{
    DRAGGING_Z_INDEX, GRID_SIZE_PX, SAVED_CLEAR_MS, VIEWPORT_SAVE_DEBOUNCE_MS, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};
use crate::error::HookError;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub zoom_step: f64,
    pub grid_size_px: f64,
    pub viewport_debounce_ms: f64,
    pub saved_clear_ms: f64,
    pub dragging_z_index: String,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,
            grid_size_px: GRID_SIZE_PX,
            viewport_debounce_ms: VIEWPORT_SAVE_DEBOUNCE_MS,
            saved_clear_ms: SAVED_CLEAR_MS,
            dragging_z_index: DRAGGING_Z_INDEX.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl HookConfig {
    /// Parse and validate a config object; an empty or whitespace string yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Config`] for malformed JSON and
    /// [`HookError::InvalidConfig`] for values that fail [`HookConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, HookError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`HookError::InvalidConfig`] when the zoom range is empty or
    /// non-positive, the step or grid size is not positive, a period is
    /// negative, or the log level is unknown.
    pub fn validate(&self) -> Result<(), HookError> {
        if !(self.zoom_min > 0.0 && self.zoom_min <= self.zoom_max) {
            return Err(HookError::InvalidConfig(format!(
                "zoom range [{}, {}] must be positive and non-empty",
                self.zoom_min, self.zoom_max
            )));
        }
        if self.zoom_step <= 0.0 {
            return Err(HookError::InvalidConfig(format!("zoom_step must be positive, got {}", self.zoom_step)));
        }
        if self.grid_size_px <= 0.0 {
            return Err(HookError::InvalidConfig(format!(
                "grid_size_px must be positive, got {}",
                self.grid_size_px
            )));
        }
        if self.viewport_debounce_ms < 0.0 || self.saved_clear_ms < 0.0 {
            return Err(HookError::InvalidConfig("timer periods must not be negative".to_owned()));
        }
        self.parsed_log_level()?;
        Ok(())
    }

    #[must_use]
    pub fn zoom_bounds(&self) -> ZoomBounds {
        ZoomBounds { min: self.zoom_min, max: self.zoom_max }
    }

    /// The configured level, matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::InvalidConfig`] for a name `log` does not know.
    pub fn parsed_log_level(&self) -> Result<log::Level, HookError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| HookError::InvalidConfig(format!("unknown log_level '{}'", self.log_level)))
    }
}
