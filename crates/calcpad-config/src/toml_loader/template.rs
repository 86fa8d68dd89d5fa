//! Default TOML config template with inline documentation comments.

/// The default config file, with every option commented out.
pub fn default_config_toml() -> &'static str {
    r##"# Calcpad Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[palette]
# Button colors: #RGB, #RRGGBB or #AARRGGBB.
# dark_gray = "#333333"    # digits, +/- and ,
# orange = "#FF9500"       # operators and =
# light_gray = "#505050"   # AC, % and delete

[display]
# upper_text = "5 + 4"
# lower_text = "9"
# upper_font_size = 24     # 8-96
# lower_font_size = 48     # 8-128

[layout]
# menu_button_size = 36    # 16-96
# menu_icon_size = 32      # 8-96, not larger than menu_button_size
# padding = 16             # 0-64

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
}
