//! Core types and constructors for WindowManager.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use casement_common::{
    Direction, EventBus, ScreenSize, TransitionOptions, TransitionOverride, WindowOptions,
};
use casement_config::CasementConfig;
use serde::{Deserialize, Serialize};

use crate::group::WindowGroup;
use crate::handle::Window;
use crate::host::{HostSink, NullSink};
use crate::layout_presets::LayoutPresets;
use crate::state::WindowState;
use crate::window_presets::WindowPresets;

fn default_columns() -> usize {
    crate::geometry::DEFAULT_GRID_COLUMNS
}

/// A manager-level layout remembered under a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedLayout {
    Arrange {
        windows: Vec<String>,
        #[serde(default)]
        direction: Direction,
    },
    Grid {
        windows: Vec<String>,
        #[serde(default = "default_columns")]
        columns: usize,
    },
}

/// Owns every window, group and preset registry.
///
/// One value per application, borrowed `&mut` by whoever drives it.
pub struct WindowManager {
    /// Registered windows by label.
    pub(crate) windows: HashMap<String, Window>,
    /// Groups by name.
    pub(crate) groups: BTreeMap<String, WindowGroup>,
    /// Options merged under every `create` call.
    pub(crate) defaults: WindowOptions,
    pub(crate) screen: ScreenSize,
    /// Transition settings new windows start with.
    pub(crate) transitions: TransitionOptions,
    pub(crate) transition_presets: BTreeMap<String, TransitionOverride>,
    pub(crate) layout_presets: LayoutPresets,
    pub(crate) window_presets: WindowPresets,
    pub(crate) window_state: WindowState,
    pub(crate) named_layouts: HashMap<String, NamedLayout>,
    pub(crate) host: Arc<dyn HostSink>,
    pub(crate) events: EventBus,
    /// When set, each new group persists to `<dir>/<name>.json`.
    pub(crate) group_state_dir: Option<PathBuf>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManager")
            .field("windows", &self.windows.len())
            .field("groups", &self.groups.keys().collect::<Vec<_>>())
            .field("screen", &self.screen)
            .finish()
    }
}

impl WindowManager {
    /// A manager with built-in defaults and no host attached.
    pub fn new() -> Self {
        Self::from_config(&CasementConfig::default())
    }

    pub fn from_config(config: &CasementConfig) -> Self {
        let screen = config.screen.size();
        Self {
            windows: HashMap::new(),
            groups: BTreeMap::new(),
            defaults: config.window.to_options(),
            screen,
            transitions: config.transitions.defaults(),
            transition_presets: config.transitions.presets.clone(),
            layout_presets: LayoutPresets::new(),
            window_presets: WindowPresets::new(screen),
            window_state: WindowState::new(),
            named_layouts: HashMap::new(),
            host: Arc::new(NullSink),
            events: EventBus::default(),
            group_state_dir: config.persistence.group_state_dir.clone(),
        }
    }

    pub fn with_host(mut self, host: Arc<dyn HostSink>) -> Self {
        self.host = host;
        self
    }

    /// Replace the screen size. Window presets are rebuilt against it.
    pub fn with_screen(mut self, screen: ScreenSize) -> Self {
        self.screen = screen;
        self.window_presets = WindowPresets::new(screen);
        self
    }

    pub fn with_defaults(mut self, defaults: WindowOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_group_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.group_state_dir = Some(dir.into());
        self
    }

    // -- Accessors --

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn defaults(&self) -> &WindowOptions {
        &self.defaults
    }

    pub fn transition_defaults(&self) -> &TransitionOptions {
        &self.transitions
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn layout_presets(&self) -> &LayoutPresets {
        &self.layout_presets
    }

    pub fn layout_presets_mut(&mut self) -> &mut LayoutPresets {
        &mut self.layout_presets
    }

    pub fn window_presets(&self) -> &WindowPresets {
        &self.window_presets
    }

    pub fn window_presets_mut(&mut self) -> &mut WindowPresets {
        &mut self.window_presets
    }

    pub fn window_state(&self) -> &WindowState {
        &self.window_state
    }

    pub fn window_state_mut(&mut self) -> &mut WindowState {
        &mut self.window_state
    }

    pub fn named_layout(&self, name: &str) -> Option<&NamedLayout> {
        self.named_layouts.get(name)
    }
}
