//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# quadbatch configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[batch]
# buffer_elements = 8192   # quads per vertex buffer, 1-1048576
# buffer_count = 1         # multi-buffering, 1-8
# draw_calls = 256         # 1-4096
# max_texture_units = 4    # 0-8
# depth_baseline = -1.0
# depth_step = 0.00005

[matrix]
# stack_size = 32          # 1-256

[stereo]
# enabled = false
# eye_separation = 0.0635  # 0.0-1.0

[framebuffer]
# width = 800              # 1-16384
# height = 450             # 1-16384

[logging]
# level = "INFO"           # DEBUG, INFO, WARNING, ERROR
"##
}
