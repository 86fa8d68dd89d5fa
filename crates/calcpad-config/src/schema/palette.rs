//! Button palette configuration.

use serde::{Deserialize, Serialize};

/// Hex strings for the three button swatches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub dark_gray: String,
    pub orange: String,
    pub light_gray: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            dark_gray: "#333333".into(),
            orange: "#FF9500".into(),
            light_gray: "#505050".into(),
        }
    }
}
