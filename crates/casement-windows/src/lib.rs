//! Window registry, groups, layout presets and state persistence for
//! Casement.
//!
//! The [`WindowManager`] owns a mirror of every native window's options
//! keyed by label. Layout operations compute geometry with the shared
//! [`geometry`] module and either apply it to the mirror directly or send
//! animated transitions to the window host through a [`HostSink`].

pub mod cache;
pub mod geometry;
pub mod group;
pub mod handle;
pub mod host;
pub mod layout_presets;
pub mod manager;
pub mod state;
pub mod transition;
pub mod window_presets;

pub use cache::{FileCache, MemoryCache, TtlCache};
pub use group::{GroupEvent, GroupEventKind, GroupMut, LayoutExport, WindowGroup};
pub use handle::{Window, WindowHandle};
pub use host::{ChannelSink, HostMessage, HostSink, NullSink, RecordingSink, TransitionMessage};
pub use layout_presets::{LayoutOptions, LayoutPresets, Placement};
pub use manager::{NamedLayout, WindowManager};
pub use state::{
    GroupStateRecord, WindowGroupState, WindowGroupStateManager, WindowState, WindowStateSnapshot,
};
pub use transition::WindowTransition;
pub use window_presets::WindowPresets;
