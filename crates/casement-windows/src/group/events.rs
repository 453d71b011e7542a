//! Group-local events and their listeners.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::WindowGroup;
use crate::layout_presets::LayoutOptions;

/// Event names a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupEventKind {
    LayoutChanged,
    StateChanged,
    StateCleared,
    StateRemoved,
    WindowsMinimized,
    WindowsRestored,
}

impl GroupEventKind {
    pub const ALL: [GroupEventKind; 6] = [
        GroupEventKind::LayoutChanged,
        GroupEventKind::StateChanged,
        GroupEventKind::StateCleared,
        GroupEventKind::StateRemoved,
        GroupEventKind::WindowsMinimized,
        GroupEventKind::WindowsRestored,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GroupEventKind::LayoutChanged => "layout.changed",
            GroupEventKind::StateChanged => "state.changed",
            GroupEventKind::StateCleared => "state.cleared",
            GroupEventKind::StateRemoved => "state.removed",
            GroupEventKind::WindowsMinimized => "windows.minimized",
            GroupEventKind::WindowsRestored => "windows.restored",
        }
    }
}

impl fmt::Display for GroupEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GroupEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupEventKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown group event: {s}"))
    }
}

/// An event raised on a group, with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupEvent {
    LayoutChanged { preset: String, options: LayoutOptions },
    StateChanged { key: String, value: Value },
    StateCleared,
    StateRemoved { key: String },
    WindowsMinimized,
    WindowsRestored,
}

impl GroupEvent {
    pub fn kind(&self) -> GroupEventKind {
        match self {
            GroupEvent::LayoutChanged { .. } => GroupEventKind::LayoutChanged,
            GroupEvent::StateChanged { .. } => GroupEventKind::StateChanged,
            GroupEvent::StateCleared => GroupEventKind::StateCleared,
            GroupEvent::StateRemoved { .. } => GroupEventKind::StateRemoved,
            GroupEvent::WindowsMinimized => GroupEventKind::WindowsMinimized,
            GroupEvent::WindowsRestored => GroupEventKind::WindowsRestored,
        }
    }
}

/// Callback invoked synchronously with the event and the group raising it.
pub type GroupListener = Box<dyn Fn(&GroupEvent, &WindowGroup) + Send>;

#[derive(Default)]
pub(crate) struct Listeners {
    by_kind: HashMap<GroupEventKind, Vec<GroupListener>>,
}

impl Listeners {
    pub(crate) fn add(&mut self, kind: GroupEventKind, listener: GroupListener) {
        self.by_kind.entry(kind).or_default().push(listener);
    }

    pub(crate) fn get(&self, kind: GroupEventKind) -> &[GroupListener] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn len(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listeners({})", self.len())
    }
}
