//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod screen;

#[cfg(test)]
mod tests;

use crate::schema::CasementConfig;
use casement_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CasementConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    screen::validate_screen(&mut errors, config);
    screen::validate_window(&mut errors, config);
    misc::validate_transitions(&mut errors, config);
    misc::validate_persistence(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
