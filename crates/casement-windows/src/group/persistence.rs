//! Member state snapshots and layout import/export.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use casement_common::{PersistenceError, Result};
use tracing::debug;

use super::types::LayoutExport;
use super::GroupMut;
use crate::state::{WindowGroupState, WindowState, WindowStateSnapshot};

impl GroupMut<'_> {
    /// Snapshot every member window. Snapshots also land in the manager's
    /// window state store.
    pub fn save_state(&mut self) -> BTreeMap<String, WindowStateSnapshot> {
        let manager = &mut *self.manager;
        let mut states = BTreeMap::new();
        for label in &self.group.members {
            if let Some(window) = manager.windows.get(label) {
                states.insert(label.clone(), manager.window_state.save(label, window));
            }
        }
        states
    }

    /// Apply snapshots to the members they name. Returns how many applied.
    pub fn restore_state(&mut self, states: &BTreeMap<String, WindowStateSnapshot>) -> usize {
        let mut restored = 0;
        for (label, snapshot) in states {
            if !self.group.has(label) {
                continue;
            }
            if let Some(window) = self.manager.windows.get_mut(label) {
                WindowState::restore(window, snapshot);
                restored += 1;
            }
        }
        restored
    }

    /// Apply an exported layout. Returns `false` when it names no preset.
    pub fn import_layout(&mut self, config: &LayoutExport) -> Result<bool> {
        let Some(preset) = &config.preset else {
            return Ok(false);
        };
        self.apply_layout(preset, config.options.clone())?;
        Ok(true)
    }

    /// Import a layout written by `save_layout_to_file`. A missing file is
    /// not an error and applies nothing.
    pub fn load_layout_from_file(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "layout file absent");
                return Ok(false);
            }
            Err(e) => return Err(PersistenceError::from(e).into()),
        };
        let config: LayoutExport = serde_json::from_str(&content)?;
        self.import_layout(&config)
    }

    /// Back the group's state store with a JSON file, load it, and restore
    /// any record saved for this group. Returns whether one was found.
    ///
    /// On a read or parse failure the current store is left in place.
    pub fn attach_state_file(&mut self, path: impl Into<PathBuf>) -> Result<bool> {
        let mut persisted = WindowGroupState::with_path(path);
        persisted.load_from_file()?;
        Ok(self.adopt_state(persisted))
    }

    /// Install an already loaded store and restore this group's record.
    pub(crate) fn adopt_state(&mut self, persisted: WindowGroupState) -> bool {
        self.group.persisted = persisted;
        let Some(record) = self.group.persisted.get(&self.group.name).cloned() else {
            return false;
        };
        let restored = self.restore_state(&record.windows);
        debug!(group = %self.group.name, restored, "saved group state restored");
        true
    }
}
