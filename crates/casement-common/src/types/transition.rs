use serde::{Deserialize, Serialize};

/// Animation envelope sent alongside every transition request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionOptions {
    /// Duration in milliseconds.
    pub duration: u64,
    /// Easing curve name understood by the window host.
    pub easing: String,
    /// When disabled, geometry changes are applied immediately.
    pub enabled: bool,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration: 300,
            easing: "easeInOutCubic".into(),
            enabled: true,
        }
    }
}

impl TransitionOptions {
    /// Apply the present fields of a named preset.
    pub fn apply_override(&mut self, preset: &TransitionOverride) {
        if let Some(duration) = preset.duration {
            self.duration = duration;
        }
        if let Some(easing) = &preset.easing {
            self.easing = easing.clone();
        }
        if let Some(enabled) = preset.enabled {
            self.enabled = enabled;
        }
    }
}

/// A partial set of transition options, as stored in named presets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
