use serde::{Deserialize, Serialize};

use super::Rgba;

/// A color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::OPAQUE_BLACK
    }
}

impl Color {
    pub const OPAQUE_BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Each channel divided by 255.
    pub fn normalized(&self) -> Rgba {
        Rgba {
            alpha: f64::from(self.a) / 255.0,
            red: f64::from(self.r) / 255.0,
            green: f64::from(self.g) / 255.0,
            blue: f64::from(self.b) / 255.0,
        }
    }

    /// `#RRGGBB` when opaque, otherwise `#AARRGGBB`.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}
