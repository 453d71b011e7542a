//! Group registry: create, look up, remove.

use casement_common::{Event, Result, WindowError, WindowOptions};
use tracing::debug;

use super::WindowManager;
use crate::group::{GroupMut, WindowGroup};
use crate::state::WindowGroupState;

impl WindowManager {
    /// Register an empty group.
    pub fn create_group(&mut self, name: &str) -> Result<GroupMut<'_>> {
        self.create_group_with_windows(name, Vec::<(String, WindowOptions)>::new())
    }

    /// Register a group, creating and adding the given windows.
    ///
    /// Fails before anything is created if the name is taken
    /// ([`WindowError::DuplicateGroup`]), unusable as a file name
    /// ([`WindowError::InvalidGroupName`]), or if the group's state file
    /// under the configured group state directory cannot be read. Any
    /// record saved there is restored onto the new members.
    pub fn create_group_with_windows<I, K>(&mut self, name: &str, windows: I) -> Result<GroupMut<'_>>
    where
        I: IntoIterator<Item = (K, WindowOptions)>,
        K: Into<String>,
    {
        check_group_name(name)?;
        if self.groups.contains_key(name) {
            return Err(WindowError::DuplicateGroup(name.to_string()).into());
        }
        let persisted = match &self.group_state_dir {
            Some(dir) => {
                let mut state = WindowGroupState::with_path(dir.join(format!("{name}.json")));
                state.load_from_file()?;
                Some(state)
            }
            None => None,
        };

        let labels = self.create_multiple(windows);
        self.groups
            .insert(name.to_string(), WindowGroup::new(name, self.transitions.clone()));
        self.events.publish(Event::GroupCreated(name.to_string()));
        debug!(group = name, members = labels.len(), "group created");

        let mut group = self.take_group(name)?;
        for label in &labels {
            group.add(label);
        }
        if let Some(state) = persisted {
            group.adopt_state(state);
        }
        Ok(group)
    }

    pub fn group(&self, name: &str) -> Option<&WindowGroup> {
        self.groups.get(name)
    }

    /// Mutable access to a group together with the windows it arranges.
    pub fn group_mut(&mut self, name: &str) -> Option<GroupMut<'_>> {
        let group = self.groups.remove(name)?;
        Some(GroupMut::new(self, group))
    }

    fn take_group(&mut self, name: &str) -> Result<GroupMut<'_>> {
        self.group_mut(name)
            .ok_or_else(|| WindowError::UnknownGroup(name.to_string()).into())
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Group names, sorted.
    pub fn group_names(&self) -> Vec<String> {
        self.groups.keys().cloned().collect()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Drop a group. Member windows stay registered.
    pub fn remove_group(&mut self, name: &str) -> bool {
        let Some(group) = self.groups.remove(name) else {
            return false;
        };
        for label in group.all() {
            if let Some(window) = self.windows.get_mut(label) {
                window.leave_group(name);
            }
        }
        self.events.publish(Event::GroupRemoved(name.to_string()));
        debug!(group = name, "group removed");
        true
    }
}

/// Group names double as state file names.
fn check_group_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(WindowError::InvalidGroupName(name.to_string()).into());
    }
    Ok(())
}
