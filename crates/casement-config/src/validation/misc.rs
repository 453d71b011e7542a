//! Transition and persistence validation.

use crate::schema::CasementConfig;

use super::helpers::{validate_not_blank, validate_range_u64};

const MAX_DURATION_MS: u64 = 10_000;

pub(crate) fn validate_transitions(errors: &mut Vec<String>, config: &CasementConfig) {
    let transitions = &config.transitions;
    validate_range_u64(
        errors,
        "transitions.duration",
        transitions.duration,
        0,
        MAX_DURATION_MS,
    );
    validate_not_blank(errors, "transitions.easing", &transitions.easing);

    for (name, preset) in &transitions.presets {
        if let Some(duration) = preset.duration {
            validate_range_u64(
                errors,
                &format!("transitions.presets.{name}.duration"),
                duration,
                0,
                MAX_DURATION_MS,
            );
        }
        if let Some(easing) = &preset.easing {
            validate_not_blank(errors, &format!("transitions.presets.{name}.easing"), easing);
        }
    }
}

pub(crate) fn validate_persistence(errors: &mut Vec<String>, config: &CasementConfig) {
    let persistence = &config.persistence;
    validate_not_blank(errors, "persistence.cache_key", &persistence.cache_key);
    validate_range_u64(
        errors,
        "persistence.ttl_secs",
        persistence.ttl_secs,
        60,
        90 * 24 * 60 * 60,
    );
}
