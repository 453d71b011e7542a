//! Casement configuration system.
//!
//! Provides TOML-based configuration for the window registry: nominal
//! screen size, default window options, transition defaults and presets,
//! persistence, and logging. All sections use sensible defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use casement_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{CasementConfig, PersistenceConfig, CONFIG_SCHEMA_VERSION};

use casement_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<CasementConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &CasementConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
