//! Display area configuration.

use serde::{Deserialize, Serialize};

/// Text shown above the number pad.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Expression line, drawn in gray.
    pub upper_text: String,
    /// Result line, drawn in white.
    pub lower_text: String,
    /// Point size of the expression line (valid range: 8-96).
    pub upper_font_size: u32,
    /// Point size of the result line (valid range: 8-128).
    pub lower_font_size: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            upper_text: "5 + 4".into(),
            lower_text: "9".into(),
            upper_font_size: 24,
            lower_font_size: 48,
        }
    }
}
