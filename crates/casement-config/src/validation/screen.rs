//! Screen and default-window validation.

use crate::schema::CasementConfig;

use super::helpers::validate_range;

pub(crate) fn validate_screen(errors: &mut Vec<String>, config: &CasementConfig) {
    validate_range(errors, "screen.width", config.screen.width, 320, 16384);
    validate_range(errors, "screen.height", config.screen.height, 240, 16384);
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &CasementConfig) {
    let window = &config.window;
    validate_range(errors, "window.width", window.width, 1, 16384);
    validate_range(errors, "window.height", window.height, 1, 16384);

    if let (Some(min), Some(max)) = (window.min_width, window.max_width) {
        if min > max {
            errors.push(format!(
                "window.min_width = {min} exceeds window.max_width = {max}"
            ));
        }
    }
    if let (Some(min), Some(max)) = (window.min_height, window.max_height) {
        if min > max {
            errors.push(format!(
                "window.min_height = {min} exceeds window.max_height = {max}"
            ));
        }
    }
}
