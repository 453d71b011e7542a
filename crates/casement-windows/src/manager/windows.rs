//! Window registry operations: create, look up, close.

use std::collections::hash_map::{Entry, HashMap};

use casement_common::{Event, WindowError, WindowOptions};
use tracing::debug;

use super::WindowManager;
use crate::handle::{Window, WindowHandle};
use crate::state::{WindowState, WindowStateSnapshot};
use crate::transition::WindowTransition;

impl WindowManager {
    /// Register a window under `label`, replacing any window already there.
    ///
    /// The manager defaults are applied first, then `options` on top.
    pub fn create(&mut self, label: &str, options: WindowOptions) -> &mut Window {
        let mut window = Window::new(label, self.transitions.clone());
        window.configure(&self.defaults.clone().merged(&options));
        self.events.publish(Event::WindowCreated(label.to_string()));

        match self.windows.entry(label.to_string()) {
            Entry::Occupied(mut slot) => {
                debug!(label, "replacing existing window");
                slot.insert(window);
                slot.into_mut()
            }
            Entry::Vacant(slot) => {
                debug!(label, "window created");
                slot.insert(window)
            }
        }
    }

    /// Create several windows. Returns the labels in creation order.
    pub fn create_multiple<I, K>(&mut self, windows: I) -> Vec<String>
    where
        I: IntoIterator<Item = (K, WindowOptions)>,
        K: Into<String>,
    {
        windows
            .into_iter()
            .map(|(label, options)| {
                let label = label.into();
                self.create(&label, options);
                label
            })
            .collect()
    }

    /// Create a window from a named preset. The label defaults to the
    /// preset name. Unknown presets create nothing.
    pub fn create_from_preset(
        &mut self,
        preset: &str,
        label: Option<&str>,
    ) -> Result<&mut Window, WindowError> {
        let options = self
            .window_presets
            .get(preset)
            .cloned()
            .ok_or_else(|| WindowError::UnknownWindowPreset(preset.to_string()))?;
        Ok(self.create(label.unwrap_or(preset), options))
    }

    pub fn create_dialog(&mut self, label: Option<&str>) -> Result<&mut Window, WindowError> {
        self.create_from_preset("dialog", label)
    }

    pub fn get(&self, label: &str) -> Option<&Window> {
        self.windows.get(label)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut Window> {
        self.windows.get_mut(label)
    }

    pub fn all(&self) -> &HashMap<String, Window> {
        &self.windows
    }

    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Registered labels, sorted.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.windows.keys().cloned().collect();
        labels.sort();
        labels
    }

    /// Unregister a window and detach it from every group.
    pub fn close(&mut self, label: &str) -> bool {
        if self.windows.remove(label).is_none() {
            return false;
        }
        for group in self.groups.values_mut() {
            group.detach(label);
        }
        self.events.publish(Event::WindowClosed(label.to_string()));
        debug!(label, "window closed");
        true
    }

    pub fn close_multiple<S: AsRef<str>>(&mut self, labels: &[S]) -> usize {
        labels.iter().filter(|l| self.close(l.as_ref())).count()
    }

    pub fn close_all(&mut self) {
        for label in self.labels() {
            self.close(&label);
        }
    }

    /// Focus one window. Every other window loses focus.
    pub fn focus(&mut self, label: &str) -> bool {
        if !self.windows.contains_key(label) {
            return false;
        }
        for (other, window) in self.windows.iter_mut() {
            if other == label {
                window.focus();
            } else if window.is_focused() {
                window.blur();
            }
        }
        true
    }

    /// Transition controller for one window.
    pub fn transition(&mut self, label: &str) -> Option<WindowTransition<'_>> {
        let host = self.host.as_ref();
        let presets = &self.transition_presets;
        self.windows
            .get_mut(label)
            .map(|window| WindowTransition::new(window, host, presets))
    }

    /// Snapshot a window into the manager's state store.
    pub fn save_window_state(&mut self, label: &str) -> Option<WindowStateSnapshot> {
        let window = self.windows.get(label)?;
        Some(self.window_state.save(label, window))
    }

    /// Apply a snapshot to a registered window.
    pub fn restore_window_state(&mut self, label: &str, snapshot: &WindowStateSnapshot) -> bool {
        match self.windows.get_mut(label) {
            Some(window) => {
                WindowState::restore(window, snapshot);
                true
            }
            None => false,
        }
    }
}
