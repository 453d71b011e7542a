//! Transition animation defaults and named presets.

use std::collections::BTreeMap;

use casement_common::{TransitionOptions, TransitionOverride};
use serde::{Deserialize, Serialize};

/// Default animation settings applied to every new window transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionsConfig {
    pub enabled: bool,
    /// Duration in milliseconds (valid range: 0-10000).
    pub duration: u64,
    pub easing: String,
    /// Named partial overrides selectable with `use_preset`.
    pub presets: BTreeMap<String, TransitionOverride>,
}

impl Default for TransitionsConfig {
    fn default() -> Self {
        let defaults = TransitionOptions::default();
        let mut presets = BTreeMap::new();
        presets.insert(
            "fast".to_string(),
            TransitionOverride {
                duration: Some(150),
                easing: Some("easeOutQuad".into()),
                enabled: None,
            },
        );
        presets.insert(
            "slow".to_string(),
            TransitionOverride {
                duration: Some(600),
                easing: Some("easeInOutCubic".into()),
                enabled: None,
            },
        );
        presets.insert(
            "instant".to_string(),
            TransitionOverride {
                enabled: Some(false),
                ..Default::default()
            },
        );
        Self {
            enabled: defaults.enabled,
            duration: defaults.duration,
            easing: defaults.easing,
            presets,
        }
    }
}

impl TransitionsConfig {
    /// The options a freshly created window starts with.
    pub fn defaults(&self) -> TransitionOptions {
        TransitionOptions {
            duration: self.duration,
            easing: self.easing.clone(),
            enabled: self.enabled,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
