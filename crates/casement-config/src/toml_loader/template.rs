//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Casement Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[screen]
# width = 1920           # 320-16384
# height = 1080          # 240-16384

[window]
# Merged into every window the manager creates.
# title = "Casement"
# width = 800            # 1-16384
# height = 600           # 1-16384
# resizable = true
# fullscreen = false
# decorations = true

[transitions]
# enabled = true
# duration = 300         # milliseconds, 0-10000
# easing = "easeInOutCubic"

# [transitions.presets.fast]
# duration = 150
# easing = "easeOutQuad"

[persistence]
# cache_key = "window_groups"
# ttl_secs = 604800      # 60-7776000 (7 days by default)
# cache_path = "/path/to/cache.json"
# group_state_dir = "/path/to/groups"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
