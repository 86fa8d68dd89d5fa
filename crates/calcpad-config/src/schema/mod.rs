//! Configuration schema types for Calcpad.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod display;
mod layout;
mod logging;
mod palette;

pub use display::*;
pub use layout::*;
pub use logging::*;
pub use palette::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Calcpad.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcpadConfig {
    pub palette: PaletteConfig,
    pub display: DisplayConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}
