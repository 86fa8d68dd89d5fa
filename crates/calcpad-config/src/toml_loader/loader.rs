//! Core TOML config loading: read from path or platform default.

use crate::schema::CalcpadConfig;
use crate::validation;
use calcpad_common::ConfigError;
use std::path::Path;
use tracing::{debug, info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. If validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<CalcpadConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: CalcpadConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("{e}; using parsed config as-is");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/calcpad/config.toml`
/// On Linux: `~/.config/calcpad/config.toml`
///
/// If the file does not exist, writes the default template and returns defaults.
pub fn load_default() -> Result<CalcpadConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(CalcpadConfig::default())
        }
        Err(e) => Err(e),
    }
}
