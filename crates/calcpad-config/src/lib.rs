//! Calcpad configuration and color parsing.
//!
//! Holds the hex color parser used for every color in the app, the
//! button palette built from it, and the TOML config file with its
//! validation. All config sections use defaults, so partial files work.
//!
//! # Quick Start
//!
//! ```rust
//! use calcpad_config::hex::parse_hex_color;
//!
//! let orange = parse_hex_color("#FF9500").normalized();
//! assert_eq!(orange.red, 1.0);
//! ```

pub mod hex;
pub mod palette;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use hex::{parse_hex_color, FallbackReason, HexColor};
pub use palette::Palette;
pub use schema::{CalcpadConfig, CONFIG_SCHEMA_VERSION};

use calcpad_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<CalcpadConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path. The file must exist.
pub fn load_config_from(path: &Path) -> Result<CalcpadConfig, ConfigError> {
    toml_loader::load_from_path(path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &CalcpadConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
