//! The group value: membership, layout record, state bag, listeners.

use std::path::Path;

use casement_common::{PersistenceError, ScreenSize, TransitionOptions};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::events::{GroupEvent, GroupEventKind, Listeners};
use crate::layout_presets::LayoutOptions;
use crate::state::WindowGroupState;

/// Portable description of a group's layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutExport {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub options: LayoutOptions,
    #[serde(default)]
    pub windows: Vec<String>,
}

/// A named, ordered set of window labels.
///
/// Members are references by label; the windows themselves live in the
/// manager. Operations that touch windows go through [`GroupMut`].
///
/// [`GroupMut`]: super::GroupMut
#[derive(Default)]
pub struct WindowGroup {
    pub(super) name: String,
    pub(super) members: Vec<String>,
    /// Index into `members` for cycling; always `< members.len()` when non-empty.
    pub(super) active: usize,
    pub(super) current_layout: Option<String>,
    pub(super) layout_options: LayoutOptions,
    pub(super) state: Map<String, Value>,
    pub(super) listeners: Listeners,
    pub(super) transition: TransitionOptions,
    /// Overrides the manager screen for group-native arrangements.
    pub(super) screen: Option<ScreenSize>,
    pub(super) persisted: WindowGroupState,
}

impl std::fmt::Debug for WindowGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowGroup")
            .field("name", &self.name)
            .field("members", &self.members)
            .field("current_layout", &self.current_layout)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl WindowGroup {
    pub fn new(name: impl Into<String>, transition: TransitionOptions) -> Self {
        Self {
            name: name.into(),
            transition,
            ..Default::default()
        }
    }

    // -- Accessors --

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member labels in insertion order.
    pub fn all(&self) -> &[String] {
        &self.members
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn has(&self, label: &str) -> bool {
        self.members.iter().any(|m| m == label)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_label(&self) -> Option<&str> {
        self.members.get(self.active).map(String::as_str)
    }

    pub fn current_layout(&self) -> Option<&str> {
        self.current_layout.as_deref()
    }

    pub fn layout_options(&self) -> &LayoutOptions {
        &self.layout_options
    }

    pub fn transition_options(&self) -> &TransitionOptions {
        &self.transition
    }

    pub fn screen_override(&self) -> Option<ScreenSize> {
        self.screen
    }

    pub fn persisted_state(&self) -> &WindowGroupState {
        &self.persisted
    }

    // -- Settings --

    pub fn transition_duration(&mut self, ms: u64) -> &mut Self {
        self.transition.duration = ms;
        self
    }

    pub fn transition_easing(&mut self, easing: impl Into<String>) -> &mut Self {
        self.transition.easing = easing.into();
        self
    }

    /// Arrange against a different screen size than the manager's.
    pub fn set_screen(&mut self, screen: Option<ScreenSize>) -> &mut Self {
        self.screen = screen;
        self
    }

    // -- State bag --

    pub fn set_state(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        self.state.insert(key.clone(), value.clone());
        self.trigger(&GroupEvent::StateChanged { key, value });
        self
    }

    pub fn get_state(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }

    pub fn get_state_or(&self, key: &str, default: Value) -> Value {
        self.state.get(key).cloned().unwrap_or(default)
    }

    /// Remove one key, or everything when `key` is `None`.
    pub fn clear_state(&mut self, key: Option<&str>) -> &mut Self {
        match key {
            Some(key) => {
                self.state.remove(key);
                self.trigger(&GroupEvent::StateRemoved {
                    key: key.to_string(),
                });
            }
            None => {
                self.state.clear();
                self.trigger(&GroupEvent::StateCleared);
            }
        }
        self
    }

    // -- Events --

    pub fn on<F>(&mut self, kind: GroupEventKind, listener: F) -> &mut Self
    where
        F: Fn(&GroupEvent, &WindowGroup) + Send + 'static,
    {
        self.listeners.add(kind, Box::new(listener));
        self
    }

    pub fn on_layout_change<F>(&mut self, listener: F) -> &mut Self
    where
        F: Fn(&GroupEvent, &WindowGroup) + Send + 'static,
    {
        self.on(GroupEventKind::LayoutChanged, listener)
    }

    /// Call every listener registered for the event's kind, in order.
    pub fn trigger(&self, event: &GroupEvent) {
        for listener in self.listeners.get(event.kind()) {
            listener(event, self);
        }
    }

    // -- Layout export --

    pub fn export_layout(&self) -> LayoutExport {
        LayoutExport {
            preset: self.current_layout.clone(),
            options: self.layout_options.clone(),
            windows: self.members.clone(),
        }
    }

    pub fn save_layout_to_file(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&self.export_layout())?)?;
        debug!(group = %self.name, path = %path.display(), "layout exported");
        Ok(())
    }

    // -- Membership bookkeeping --

    pub(crate) fn push_member(&mut self, label: &str) -> bool {
        if self.has(label) {
            return false;
        }
        self.members.push(label.to_string());
        true
    }

    /// Drop a member, keeping the active index on the same window where possible.
    pub(crate) fn detach(&mut self, label: &str) -> bool {
        let Some(idx) = self.members.iter().position(|m| m == label) else {
            return false;
        };
        self.members.remove(idx);
        if idx < self.active {
            self.active -= 1;
        }
        if self.active >= self.members.len() {
            self.active = self.members.len().saturating_sub(1);
        }
        true
    }
}
