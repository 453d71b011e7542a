//! Screen and default-window configuration types.

use casement_common::{ScreenSize, WindowOptions};
use serde::{Deserialize, Serialize};

/// Nominal screen size used by every layout computation.
///
/// There is no multi-monitor awareness: all layouts divide this one area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Width in pixels (valid range: 320-16384).
    pub width: u32,
    /// Height in pixels (valid range: 240-16384).
    pub height: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        let size = ScreenSize::default();
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

impl ScreenConfig {
    pub fn size(&self) -> ScreenSize {
        ScreenSize::new(self.width, self.height)
    }
}

/// Options merged into every window the manager creates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: Option<String>,
    /// Default width in pixels (valid range: 1-16384).
    pub width: u32,
    /// Default height in pixels (valid range: 1-16384).
    pub height: u32,
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub resizable: bool,
    pub fullscreen: bool,
    pub decorations: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: 800,
            height: 600,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            resizable: true,
            fullscreen: false,
            decorations: true,
        }
    }
}

impl WindowConfig {
    /// The manager-level default option set.
    pub fn to_options(&self) -> WindowOptions {
        WindowOptions {
            title: self.title.clone(),
            width: Some(self.width),
            height: Some(self.height),
            min_width: self.min_width,
            min_height: self.min_height,
            max_width: self.max_width,
            max_height: self.max_height,
            resizable: Some(self.resizable),
            fullscreen: Some(self.fullscreen),
            decorations: Some(self.decorations),
            ..Default::default()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_config_defaults() {
        let config = ScreenConfig::default();
        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 1080);
        assert_eq!(config.size(), ScreenSize::new(1920, 1080));
    }

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert!(config.resizable);
        assert!(!config.fullscreen);
        assert!(config.title.is_none());
    }

    #[test]
    fn window_config_to_options() {
        let config = WindowConfig {
            title: Some("Casement".into()),
            min_width: Some(400),
            ..Default::default()
        };
        let opts = config.to_options();
        assert_eq!(opts.title.as_deref(), Some("Casement"));
        assert_eq!(opts.width, Some(800));
        assert_eq!(opts.min_width, Some(400));
        assert_eq!(opts.resizable, Some(true));
        assert!(opts.x.is_none());
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
width = 1024
title = "Editor"
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.width, 1024);
        assert_eq!(config.title.as_deref(), Some("Editor"));
        // Defaults preserved
        assert_eq!(config.height, 600);
        assert!(config.decorations);
    }
}
