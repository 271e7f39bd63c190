#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_constants() {
    let cfg = HookConfig::default();
    assert_eq!(cfg.zoom_min, 0.25);
    assert_eq!(cfg.zoom_max, 2.0);
    assert_eq!(cfg.zoom_step, 0.1);
    assert_eq!(cfg.grid_size_px, 40.0);
    assert_eq!(cfg.viewport_debounce_ms, 500.0);
    assert_eq!(cfg.saved_clear_ms, 2000.0);
    assert_eq!(cfg.dragging_z_index, "100");
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.validate().is_ok());
}

#[test]
fn from_json_empty_yields_defaults() {
    assert_eq!(HookConfig::from_json("").unwrap(), HookConfig::default());
    assert_eq!(HookConfig::from_json("   ").unwrap(), HookConfig::default());
    assert_eq!(HookConfig::from_json("{}").unwrap(), HookConfig::default());
}

#[test]
fn from_json_overrides_selected_fields() {
    let cfg = HookConfig::from_json(r#"{"zoom_max": 4.0, "viewport_debounce_ms": 250, "log_level": "debug"}"#).unwrap();
    assert_eq!(cfg.zoom_max, 4.0);
    assert_eq!(cfg.viewport_debounce_ms, 250.0);
    assert_eq!(cfg.parsed_log_level().unwrap(), log::Level::Debug);
    assert_eq!(cfg.zoom_min, 0.25);
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = HookConfig::from_json("{zoom").unwrap_err();
    assert!(matches!(err, HookError::Config(_)));
}

#[test]
fn validate_rejects_inverted_zoom_range() {
    let err = HookConfig::from_json(r#"{"zoom_min": 3.0, "zoom_max": 2.0}"#).unwrap_err();
    assert!(matches!(err, HookError::InvalidConfig(_)));
}

#[test]
fn validate_rejects_non_positive_zoom_min() {
    let cfg = HookConfig { zoom_min: 0.0, ..HookConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_non_positive_step_and_grid() {
    let cfg = HookConfig { zoom_step: 0.0, ..HookConfig::default() };
    assert!(cfg.validate().is_err());
    let cfg = HookConfig { grid_size_px: -1.0, ..HookConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_negative_periods() {
    let cfg = HookConfig { saved_clear_ms: -1.0, ..HookConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_unknown_log_level() {
    let err = HookConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
    assert!(err.to_string().contains("loud"));
}

#[test]
fn log_level_is_case_insensitive() {
    let cfg = HookConfig { log_level: "WARN".to_owned(), ..HookConfig::default() };
    assert_eq!(cfg.parsed_log_level().unwrap(), log::Level::Warn);
    assert!(cfg.validate().is_ok());
}

#[test]
fn log_level_off_is_not_a_level() {
    let cfg = HookConfig { log_level: "off".to_owned(), ..HookConfig::default() };
    assert!(matches!(cfg.parsed_log_level(), Err(HookError::InvalidConfig(_))));
}

#[test]
fn zoom_bounds_reflect_config() {
    let cfg = HookConfig { zoom_min: 0.5, zoom_max: 3.0, ..HookConfig::default() };
    let b = cfg.zoom_bounds();
    assert_eq!(b.min, 0.5);
    assert_eq!(b.max, 3.0);
}
