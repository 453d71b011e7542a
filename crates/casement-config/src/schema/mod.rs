//! Configuration schema types for Casement.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod screen;
mod system;
mod transitions;

pub use screen::*;
pub use system::*;
pub use transitions::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Casement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct CasementConfig {
    pub screen: ScreenConfig,
    pub window: WindowConfig,
    pub transitions: TransitionsConfig,
    pub persistence: PersistenceConfig,
    pub logging: LoggingConfig,
}
