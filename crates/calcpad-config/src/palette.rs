//! Resolved button palette.
//!
//! Turns the hex strings from [`PaletteConfig`] into colors. A string that
//! does not parse is logged and replaced by the parser's fallback color, so
//! the pad always has something to draw.

use calcpad_common::{Color, Swatch};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::hex::{parse_hex_color, HexColor};
use crate::schema::PaletteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub dark_gray: Color,
    pub orange: Color,
    pub light_gray: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&PaletteConfig::default())
    }
}

impl Palette {
    pub fn from_config(config: &PaletteConfig) -> Self {
        Self {
            dark_gray: resolve("palette.dark_gray", &config.dark_gray),
            orange: resolve("palette.orange", &config.orange),
            light_gray: resolve("palette.light_gray", &config.light_gray),
        }
    }

    pub fn color_for(&self, swatch: Swatch) -> Color {
        match swatch {
            Swatch::DarkGray => self.dark_gray,
            Swatch::Orange => self.orange,
            Swatch::LightGray => self.light_gray,
        }
    }
}

fn resolve(key: &str, value: &str) -> Color {
    let parsed = parse_hex_color(value);
    if let HexColor::Fallback { color, reason } = parsed {
        warn!("{key} = {value:?}: {reason}, using {}", color.to_hex());
    }
    parsed.color()
}
