use std::collections::HashMap;

use tracing::debug;

use super::snapshot::WindowStateSnapshot;
use crate::handle::WindowHandle;

/// In-memory snapshot store keyed by window label.
#[derive(Debug, Default, Clone)]
pub struct WindowState {
    states: HashMap<String, WindowStateSnapshot>,
}

impl WindowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture and store the window's current state, replacing any earlier one.
    pub fn save<H: WindowHandle + ?Sized>(&mut self, label: &str, window: &H) -> WindowStateSnapshot {
        let snapshot = WindowStateSnapshot::capture(window.options());
        self.states.insert(label.to_string(), snapshot.clone());
        snapshot
    }

    pub fn get(&self, label: &str) -> Option<&WindowStateSnapshot> {
        self.states.get(label)
    }

    pub fn has(&self, label: &str) -> bool {
        self.states.contains_key(label)
    }

    pub fn all(&self) -> &HashMap<String, WindowStateSnapshot> {
        &self.states
    }

    pub fn clear(&mut self, label: &str) -> bool {
        self.states.remove(label).is_some()
    }

    pub fn clear_all(&mut self) {
        self.states.clear();
    }

    /// Apply a snapshot to a window.
    ///
    /// Geometry is applied only where present. Flags are always set, in a
    /// fixed order, with visibility last.
    pub fn restore<H: WindowHandle + ?Sized>(window: &mut H, snapshot: &WindowStateSnapshot) {
        if let Some(width) = snapshot.width {
            window.set_width(width);
        }
        if let Some(height) = snapshot.height {
            window.set_height(height);
        }
        if let Some(x) = snapshot.x {
            window.set_x(x);
        }
        if let Some(y) = snapshot.y {
            window.set_y(y);
        }
        window.set_maximized(snapshot.maximized);
        window.set_minimized(snapshot.minimized);
        window.set_fullscreen(snapshot.fullscreen);
        window.set_always_on_top(snapshot.always_on_top);
        window.set_resizable(snapshot.resizable);
        window.set_decorations(snapshot.decorations);
        if snapshot.visible {
            window.show();
        } else {
            window.hide();
        }
        debug!(?snapshot, "window state restored");
    }
}
