//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;
use casement_common::TransitionOverride;

#[test]
fn default_config_validates() {
    let config = CasementConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_screen_too_small() {
    let mut config = CasementConfig::default();
    config.screen.width = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("screen.width"));
}

#[test]
fn catches_zero_window_height() {
    let mut config = CasementConfig::default();
    config.window.height = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.height"));
}

#[test]
fn catches_inverted_min_max() {
    let mut config = CasementConfig::default();
    config.window.min_width = Some(900);
    config.window.max_width = Some(600);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.min_width"));
}

#[test]
fn catches_transition_duration_too_long() {
    let mut config = CasementConfig::default();
    config.transitions.duration = 60_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("transitions.duration"));
}

#[test]
fn catches_blank_preset_easing() {
    let mut config = CasementConfig::default();
    config.transitions.presets.insert(
        "broken".into(),
        TransitionOverride {
            easing: Some("  ".into()),
            ..Default::default()
        },
    );
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("transitions.presets.broken.easing"));
}

#[test]
fn catches_empty_cache_key_and_short_ttl() {
    let mut config = CasementConfig::default();
    config.persistence.cache_key = String::new();
    config.persistence.ttl_secs = 5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("persistence.cache_key"));
    assert!(err.contains("persistence.ttl_secs"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = CasementConfig::default();
    config.screen.width = 0;
    config.screen.height = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("screen.width"));
    assert!(err.contains("screen.height"));
    assert!(err.contains("; "));
}
