//! Named option bundles for common window kinds.

use std::collections::BTreeMap;

use casement_common::{ScreenSize, WindowError, WindowOptions};

use crate::handle::WindowHandle;

/// Registry of window option presets, seeded with the built-ins.
///
/// Full-screen-extent presets (`sidebar` height, `toolbar` width) are
/// resolved against the screen size given at construction.
#[derive(Debug, Clone)]
pub struct WindowPresets {
    presets: BTreeMap<String, WindowOptions>,
    screen: ScreenSize,
}

impl Default for WindowPresets {
    fn default() -> Self {
        Self::new(ScreenSize::default())
    }
}

impl WindowPresets {
    pub fn new(screen: ScreenSize) -> Self {
        let mut presets = Self {
            presets: BTreeMap::new(),
            screen,
        };
        presets.install_built_ins();
        presets
    }

    fn install_built_ins(&mut self) {
        let screen = self.screen;
        let sized = |width: u32, height: u32| WindowOptions {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        };

        self.define(
            "default",
            WindowOptions {
                center: Some(true),
                resizable: Some(true),
                decorations: Some(true),
                ..sized(800, 600)
            },
        );
        self.define(
            "main",
            WindowOptions {
                center: Some(true),
                resizable: Some(true),
                maximizable: Some(true),
                minimizable: Some(true),
                closable: Some(true),
                decorations: Some(true),
                ..sized(1200, 800)
            },
        );
        self.define(
            "dialog",
            WindowOptions {
                center: Some(true),
                resizable: Some(false),
                maximizable: Some(false),
                minimizable: Some(false),
                closable: Some(true),
                decorations: Some(true),
                always_on_top: Some(true),
                modal: Some(true),
                ..sized(500, 400)
            },
        );
        self.define(
            "frameless",
            WindowOptions {
                decorations: Some(false),
                resizable: Some(false),
                draggable: Some(true),
                transparent: Some(true),
                ..Default::default()
            },
        );
        self.define(
            "sidebar",
            WindowOptions {
                x: Some(0),
                y: Some(0),
                resizable: Some(false),
                maximizable: Some(false),
                minimizable: Some(false),
                skip_taskbar: Some(true),
                ..sized(300, screen.height)
            },
        );
        self.define(
            "toolbar",
            WindowOptions {
                x: Some(0),
                y: Some(0),
                resizable: Some(false),
                maximizable: Some(false),
                minimizable: Some(false),
                skip_taskbar: Some(true),
                always_on_top: Some(true),
                decorations: Some(false),
                ..sized(screen.width, 40)
            },
        );
        self.define(
            "notification",
            WindowOptions {
                resizable: Some(false),
                maximizable: Some(false),
                minimizable: Some(false),
                closable: Some(true),
                skip_taskbar: Some(true),
                always_on_top: Some(true),
                decorations: Some(false),
                auto_hide_ms: Some(5000),
                ..sized(300, 100)
            },
        );
        self.define(
            "panel",
            WindowOptions {
                resizable: Some(true),
                maximizable: Some(false),
                minimizable: Some(true),
                closable: Some(true),
                always_on_top: Some(true),
                skip_taskbar: Some(true),
                ..sized(400, 300)
            },
        );
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn define(&mut self, name: impl Into<String>, options: WindowOptions) -> &mut Self {
        self.presets.insert(name.into(), options);
        self
    }

    pub fn get(&self, name: &str) -> Option<&WindowOptions> {
        self.presets.get(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.presets.remove(name).is_some()
    }

    /// Drop every custom preset, leaving only the built-ins.
    pub fn clear_presets(&mut self) {
        self.presets.clear();
        self.install_built_ins();
    }

    pub fn presets(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }

    /// Configure a window with a preset's options.
    pub fn apply<H: WindowHandle + ?Sized>(&self, name: &str, window: &mut H) -> Result<(), WindowError> {
        let options = self
            .get(name)
            .ok_or_else(|| WindowError::UnknownWindowPreset(name.to_string()))?;
        window.configure(options);
        Ok(())
    }
}
