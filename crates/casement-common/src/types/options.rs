use serde::{Deserialize, Serialize};

use super::geometry::{Geometry, GeometryPatch};

/// Window configuration, every field optional.
///
/// A value of this type is both the live option snapshot a window mirrors
/// and a partial update passed to `configure`: only present fields are
/// applied, each by its own line in [`WindowOptions::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullscreen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_on_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resizable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decorations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximizable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimizable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_taskbar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<bool>,
    /// Auto-hide delay in milliseconds (notification windows).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_hide_ms: Option<u64>,
    /// Label of the parent window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Name of the group the window currently belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

fn overlay<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
    if let Some(value) = src {
        *dst = Some(value.clone());
    }
}

impl WindowOptions {
    /// Overlay every present field of `other` onto `self`.
    pub fn merge(&mut self, other: &WindowOptions) {
        overlay(&mut self.title, &other.title);
        overlay(&mut self.x, &other.x);
        overlay(&mut self.y, &other.y);
        overlay(&mut self.width, &other.width);
        overlay(&mut self.height, &other.height);
        overlay(&mut self.min_width, &other.min_width);
        overlay(&mut self.min_height, &other.min_height);
        overlay(&mut self.max_width, &other.max_width);
        overlay(&mut self.max_height, &other.max_height);
        overlay(&mut self.center, &other.center);
        overlay(&mut self.maximized, &other.maximized);
        overlay(&mut self.minimized, &other.minimized);
        overlay(&mut self.fullscreen, &other.fullscreen);
        overlay(&mut self.always_on_top, &other.always_on_top);
        overlay(&mut self.visible, &other.visible);
        overlay(&mut self.focused, &other.focused);
        overlay(&mut self.resizable, &other.resizable);
        overlay(&mut self.decorations, &other.decorations);
        overlay(&mut self.maximizable, &other.maximizable);
        overlay(&mut self.minimizable, &other.minimizable);
        overlay(&mut self.closable, &other.closable);
        overlay(&mut self.skip_taskbar, &other.skip_taskbar);
        overlay(&mut self.draggable, &other.draggable);
        overlay(&mut self.transparent, &other.transparent);
        overlay(&mut self.modal, &other.modal);
        overlay(&mut self.auto_hide_ms, &other.auto_hide_ms);
        overlay(&mut self.parent, &other.parent);
        overlay(&mut self.group, &other.group);
    }

    /// Builder-style variant of [`merge`](Self::merge).
    pub fn merged(mut self, other: &WindowOptions) -> Self {
        self.merge(other);
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.apply_geometry(geometry.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn apply_geometry(&mut self, patch: GeometryPatch) {
        overlay(&mut self.x, &patch.x);
        overlay(&mut self.y, &patch.y);
        overlay(&mut self.width, &patch.width);
        overlay(&mut self.height, &patch.height);
    }

    /// The geometry fields as currently recorded (absent ones stay absent).
    pub fn geometry(&self) -> GeometryPatch {
        GeometryPatch {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Geometry with the host's defaults filled in for unknown fields.
    pub fn frame_or_default(&self) -> Geometry {
        self.geometry().or(DEFAULT_FRAME)
    }
}

/// Frame assumed for a window whose geometry was never set.
pub const DEFAULT_FRAME: Geometry = Geometry {
    x: 0,
    y: 0,
    width: 800,
    height: 600,
};
