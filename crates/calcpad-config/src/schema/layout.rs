//! Layout metrics configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Diameter of the menu button circle (valid range: 16-96).
    pub menu_button_size: u32,
    /// Frame of the menu icon; must not exceed `menu_button_size`.
    pub menu_icon_size: u32,
    /// Padding around header, display and pad (valid range: 0-64).
    pub padding: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            menu_button_size: 36,
            menu_icon_size: 32,
            padding: 16,
        }
    }
}
