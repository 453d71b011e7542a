use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use casement_common::PersistenceError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::snapshot::WindowStateSnapshot;
use crate::layout_presets::LayoutOptions;

/// Everything remembered about one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStateRecord {
    /// Member label to snapshot.
    #[serde(default)]
    pub windows: BTreeMap<String, WindowStateSnapshot>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub options: LayoutOptions,
    /// Unix seconds at capture time.
    #[serde(default)]
    pub timestamp: i64,
}

impl GroupStateRecord {
    /// Stamp a record with the current time.
    pub fn new(
        windows: BTreeMap<String, WindowStateSnapshot>,
        layout: Option<String>,
        options: LayoutOptions,
    ) -> Self {
        Self {
            windows,
            layout,
            options,
            timestamp: Utc::now().timestamp(),
        }
    }
}

/// Group records keyed by group name, optionally mirrored to a JSON file.
///
/// Every mutation rewrites the whole file. Two processes writing the same
/// file interleave as read-modify-write and the last writer wins.
#[derive(Debug, Default, Clone)]
pub struct WindowGroupState {
    states: BTreeMap<String, GroupStateRecord>,
    config_path: Option<PathBuf>,
}

impl WindowGroupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            states: BTreeMap::new(),
            config_path: Some(path.into()),
        }
    }

    pub fn set_config_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn save(&mut self, name: &str, record: GroupStateRecord) -> Result<(), PersistenceError> {
        self.states.insert(name.to_string(), record);
        self.save_to_file()
    }

    pub fn get(&self, name: &str) -> Option<&GroupStateRecord> {
        self.states.get(name)
    }

    pub fn all(&self) -> &BTreeMap<String, GroupStateRecord> {
        &self.states
    }

    pub fn remove(&mut self, name: &str) -> Result<bool, PersistenceError> {
        let removed = self.states.remove(name).is_some();
        if removed {
            self.save_to_file()?;
        }
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.states.clear();
        self.save_to_file()
    }

    /// Replace the in-memory records with the file's. A missing file
    /// leaves an empty store.
    pub fn load_from_file(&mut self) -> Result<(), PersistenceError> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };
        self.states = match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), groups = self.states.len(), "group state loaded");
        Ok(())
    }

    fn save_to_file(&self) -> Result<(), PersistenceError> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&self.states)?)?;
        Ok(())
    }
}
