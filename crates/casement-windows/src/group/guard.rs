//! `GroupMut`: a group checked out of the manager together with the
//! manager itself, so group operations can reach member windows.

use std::ops::{Deref, DerefMut};

use casement_common::{ScreenSize, WindowOptions};
use tracing::debug;

use super::events::GroupEvent;
use super::WindowGroup;
use crate::handle::WindowHandle;
use crate::manager::WindowManager;

/// Mutable access to one group and the manager that owns it.
///
/// The group is taken out of the manager's registry for the lifetime of
/// this value and put back on drop.
pub struct GroupMut<'a> {
    pub(super) manager: &'a mut WindowManager,
    pub(super) group: WindowGroup,
}

impl<'a> GroupMut<'a> {
    pub(crate) fn new(manager: &'a mut WindowManager, group: WindowGroup) -> Self {
        Self { manager, group }
    }

    /// The owning manager. This group is absent from its registry while
    /// borrowed here.
    pub fn manager(&self) -> &WindowManager {
        &*self.manager
    }

    /// Screen used by the group-native arrangements.
    pub(super) fn arrange_screen(&self) -> ScreenSize {
        self.group.screen.unwrap_or(self.manager.screen)
    }

    // -- Membership --

    /// Add a registered window. Unknown labels are ignored.
    pub fn add(&mut self, label: &str) -> bool {
        let Some(window) = self.manager.windows.get_mut(label) else {
            debug!(group = %self.group.name, label, "add ignored unknown window");
            return false;
        };
        window.configure(&WindowOptions {
            group: Some(self.group.name.clone()),
            ..Default::default()
        });
        self.group.push_member(label)
    }

    /// Drop a member. The window stays registered with its `group` option cleared.
    pub fn remove(&mut self, label: &str) -> bool {
        if !self.group.detach(label) {
            return false;
        }
        if let Some(window) = self.manager.windows.get_mut(label) {
            window.leave_group(&self.group.name);
        }
        true
    }

    /// Close every member window and empty the group.
    pub fn close_all(&mut self) -> usize {
        let members = std::mem::take(&mut self.group.members);
        self.group.active = 0;
        members
            .iter()
            .filter(|label| self.manager.close(label))
            .count()
    }

    // -- Focus cycling --

    /// Focus the active member. Returns its label.
    pub fn focus(&mut self) -> Option<String> {
        let label = self.group.active_label()?.to_string();
        self.manager.focus(&label);
        Some(label)
    }

    pub fn next_window(&mut self) -> Option<String> {
        self.step(1)
    }

    pub fn previous_window(&mut self) -> Option<String> {
        let n = self.group.members.len();
        self.step(n.saturating_sub(1))
    }

    fn step(&mut self, forward: usize) -> Option<String> {
        let n = self.group.members.len();
        if n == 0 {
            return None;
        }
        self.group.active = (self.group.active + forward) % n;
        self.focus()
    }

    // -- Bulk window state --

    pub fn minimize_all(&mut self) -> &mut Self {
        for label in &self.group.members {
            if let Some(window) = self.manager.windows.get_mut(label) {
                window.set_minimized(true);
            }
        }
        self.group.trigger(&GroupEvent::WindowsMinimized);
        self
    }

    pub fn restore_all(&mut self) -> &mut Self {
        for label in &self.group.members {
            if let Some(window) = self.manager.windows.get_mut(label) {
                window.restore();
            }
        }
        self.group.trigger(&GroupEvent::WindowsRestored);
        self
    }
}

impl std::fmt::Debug for GroupMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GroupMut").field(&self.group).finish()
    }
}

impl Deref for GroupMut<'_> {
    type Target = WindowGroup;

    fn deref(&self) -> &WindowGroup {
        &self.group
    }
}

impl DerefMut for GroupMut<'_> {
    fn deref_mut(&mut self) -> &mut WindowGroup {
        &mut self.group
    }
}

impl Drop for GroupMut<'_> {
    fn drop(&mut self) {
        let group = std::mem::take(&mut self.group);
        self.manager.groups.insert(group.name.clone(), group);
    }
}
