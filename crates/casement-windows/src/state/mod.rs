//! Window and group state snapshots, and their persistence.
//!
//! - [`WindowState`]: in-memory per-window snapshots.
//! - [`WindowGroupState`]: per-group records mirrored to a JSON file.
//! - [`WindowGroupStateManager`]: all groups at once through a TTL cache.

mod group_state;
mod snapshot;
mod state_manager;
mod window_state;

pub use group_state::{GroupStateRecord, WindowGroupState};
pub use snapshot::WindowStateSnapshot;
pub use state_manager::{WindowGroupStateManager, DEFAULT_CACHE_KEY, DEFAULT_EXPIRE_TIME};
pub use window_state::WindowState;
