use casement_common::WindowOptions;
use serde::{Deserialize, Serialize};

fn yes() -> bool {
    true
}

/// Geometry and flags of one window at a point in time.
///
/// Geometry the window never had stays absent and is not touched on
/// restore. Flags always carry a value, defaulting as a fresh window would.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowStateSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default)]
    pub maximized: bool,
    #[serde(default)]
    pub minimized: bool,
    #[serde(default)]
    pub fullscreen: bool,
    #[serde(default)]
    pub always_on_top: bool,
    #[serde(default = "yes")]
    pub visible: bool,
    #[serde(default = "yes")]
    pub resizable: bool,
    #[serde(default = "yes")]
    pub decorations: bool,
}

impl Default for WindowStateSnapshot {
    fn default() -> Self {
        Self::capture(&WindowOptions::default())
    }
}

impl WindowStateSnapshot {
    pub fn capture(options: &WindowOptions) -> Self {
        Self {
            x: options.x,
            y: options.y,
            width: options.width,
            height: options.height,
            maximized: options.maximized.unwrap_or(false),
            minimized: options.minimized.unwrap_or(false),
            fullscreen: options.fullscreen.unwrap_or(false),
            always_on_top: options.always_on_top.unwrap_or(false),
            visible: options.visible.unwrap_or(true),
            resizable: options.resizable.unwrap_or(true),
            decorations: options.decorations.unwrap_or(true),
        }
    }
}
