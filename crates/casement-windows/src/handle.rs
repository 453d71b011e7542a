//! The native window abstraction and its in-process mirror.
//!
//! The host owns the real native windows. This crate only keeps an option
//! snapshot per label; every setter is a partial [`configure`] so the mirror
//! is the single source of truth for geometry and flags.
//!
//! [`configure`]: WindowHandle::configure

use casement_common::{GeometryPatch, TransitionOptions, WindowOptions};

/// Capabilities of one native window, addressed by its label.
pub trait WindowHandle {
    /// Current option snapshot.
    fn options(&self) -> &WindowOptions;

    /// Overlay the present fields of `options`.
    fn configure(&mut self, options: &WindowOptions);

    fn apply_geometry(&mut self, patch: GeometryPatch) {
        self.configure(&WindowOptions {
            x: patch.x,
            y: patch.y,
            width: patch.width,
            height: patch.height,
            ..Default::default()
        });
    }

    fn set_x(&mut self, x: i32) {
        self.apply_geometry(GeometryPatch {
            x: Some(x),
            ..Default::default()
        });
    }

    fn set_y(&mut self, y: i32) {
        self.apply_geometry(GeometryPatch {
            y: Some(y),
            ..Default::default()
        });
    }

    fn set_width(&mut self, width: u32) {
        self.apply_geometry(GeometryPatch {
            width: Some(width),
            ..Default::default()
        });
    }

    fn set_height(&mut self, height: u32) {
        self.apply_geometry(GeometryPatch {
            height: Some(height),
            ..Default::default()
        });
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.apply_geometry(GeometryPatch::position(x, y));
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.apply_geometry(GeometryPatch::size(width, height));
    }

    fn set_title(&mut self, title: &str) {
        self.configure(&WindowOptions::default().with_title(title));
    }

    fn set_maximized(&mut self, maximized: bool) {
        self.configure(&WindowOptions {
            maximized: Some(maximized),
            ..Default::default()
        });
    }

    fn set_minimized(&mut self, minimized: bool) {
        self.configure(&WindowOptions {
            minimized: Some(minimized),
            ..Default::default()
        });
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.configure(&WindowOptions {
            fullscreen: Some(fullscreen),
            ..Default::default()
        });
    }

    fn set_always_on_top(&mut self, always_on_top: bool) {
        self.configure(&WindowOptions {
            always_on_top: Some(always_on_top),
            ..Default::default()
        });
    }

    fn set_resizable(&mut self, resizable: bool) {
        self.configure(&WindowOptions {
            resizable: Some(resizable),
            ..Default::default()
        });
    }

    fn set_decorations(&mut self, decorations: bool) {
        self.configure(&WindowOptions {
            decorations: Some(decorations),
            ..Default::default()
        });
    }

    fn show(&mut self) {
        self.configure(&WindowOptions {
            visible: Some(true),
            ..Default::default()
        });
    }

    fn hide(&mut self) {
        self.configure(&WindowOptions {
            visible: Some(false),
            ..Default::default()
        });
    }

    fn focus(&mut self) {
        self.configure(&WindowOptions {
            focused: Some(true),
            ..Default::default()
        });
    }

    fn blur(&mut self) {
        self.configure(&WindowOptions {
            focused: Some(false),
            ..Default::default()
        });
    }

    /// Leave the minimized and maximized states.
    fn restore(&mut self) {
        self.configure(&WindowOptions {
            minimized: Some(false),
            maximized: Some(false),
            ..Default::default()
        });
    }
}

/// A registered window: its label, option mirror and animation settings.
#[derive(Debug, Clone)]
pub struct Window {
    label: String,
    options: WindowOptions,
    transition: TransitionOptions,
}

impl Window {
    pub fn new(label: impl Into<String>, transition: TransitionOptions) -> Self {
        Self {
            label: label.into(),
            options: WindowOptions::default(),
            transition,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn transition_options(&self) -> &TransitionOptions {
        &self.transition
    }

    pub fn transition_options_mut(&mut self) -> &mut TransitionOptions {
        &mut self.transition
    }

    pub fn is_visible(&self) -> bool {
        self.options.visible.unwrap_or(false)
    }

    pub fn is_minimized(&self) -> bool {
        self.options.minimized.unwrap_or(false)
    }

    pub fn is_focused(&self) -> bool {
        self.options.focused.unwrap_or(false)
    }

    /// Clear the `group` option if it still names `group`.
    pub(crate) fn leave_group(&mut self, group: &str) {
        if self.options.group.as_deref() == Some(group) {
            self.options.group = None;
        }
    }
}

impl WindowHandle for Window {
    fn options(&self) -> &WindowOptions {
        &self.options
    }

    fn configure(&mut self, options: &WindowOptions) {
        self.options.merge(options);
    }
}
