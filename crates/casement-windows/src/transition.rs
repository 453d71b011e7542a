//! Animated geometry changes for a single window.

use std::collections::BTreeMap;

use casement_common::{GeometryPatch, TransitionOptions, TransitionOverride};
use tracing::debug;

use crate::handle::{Window, WindowHandle};
use crate::host::{HostMessage, HostSink, TransitionMessage};

/// Transition controller borrowed from the manager for one window.
///
/// Settings changed through the fluent methods persist on the window. When
/// transitions are disabled, `move_to`/`resize_to`/`layout` apply directly.
/// When enabled, each call emits exactly one `window.transition` message
/// and then records the target geometry in the mirror.
pub struct WindowTransition<'a> {
    window: &'a mut Window,
    host: &'a dyn HostSink,
    presets: &'a BTreeMap<String, TransitionOverride>,
}

impl<'a> WindowTransition<'a> {
    pub fn new(
        window: &'a mut Window,
        host: &'a dyn HostSink,
        presets: &'a BTreeMap<String, TransitionOverride>,
    ) -> Self {
        Self {
            window,
            host,
            presets,
        }
    }

    pub fn options(&self) -> &TransitionOptions {
        self.window.transition_options()
    }

    pub fn duration(&mut self, ms: u64) -> &mut Self {
        self.window.transition_options_mut().duration = ms;
        self
    }

    pub fn easing(&mut self, easing: impl Into<String>) -> &mut Self {
        self.window.transition_options_mut().easing = easing.into();
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.window.transition_options_mut().enabled = enabled;
        self
    }

    /// Overlay a named preset. Unknown names leave the settings unchanged.
    pub fn use_preset(&mut self, name: &str) -> &mut Self {
        match self.presets.get(name) {
            Some(preset) => self.window.transition_options_mut().apply_override(preset),
            None => debug!(preset = name, "unknown transition preset ignored"),
        }
        self
    }

    pub fn move_to(&mut self, x: i32, y: i32) -> &mut Self {
        self.transition(GeometryPatch::position(x, y))
    }

    pub fn resize_to(&mut self, width: u32, height: u32) -> &mut Self {
        self.transition(GeometryPatch::size(width, height))
    }

    pub fn layout(&mut self, target: impl Into<GeometryPatch>) -> &mut Self {
        self.transition(target.into())
    }

    fn transition(&mut self, target: GeometryPatch) -> &mut Self {
        if target.is_empty() {
            return self;
        }
        if self.window.transition_options().enabled {
            let current = self.window.options().frame_or_default();
            let from = GeometryPatch {
                x: target.x.map(|_| current.x),
                y: target.y.map(|_| current.y),
                width: target.width.map(|_| current.width),
                height: target.height.map(|_| current.height),
            };
            debug!(label = self.window.label(), ?target, "emitting window transition");
            self.host.send(HostMessage::Transition(TransitionMessage {
                window: self.window.options().clone(),
                from,
                to: target,
                options: self.window.transition_options().clone(),
            }));
        }
        self.window.apply_geometry(target);
        self
    }
}
