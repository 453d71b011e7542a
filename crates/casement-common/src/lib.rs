pub mod errors;
pub mod events;
pub mod types;

pub use errors::{CasementError, ConfigError, PersistenceError, WindowError};
pub use events::{Event, EventBus};
pub use types::{
    Direction, Geometry, GeometryPatch, ScreenSize, TransitionOptions, TransitionOverride,
    WindowOptions,
};

pub type Result<T> = std::result::Result<T, CasementError>;
