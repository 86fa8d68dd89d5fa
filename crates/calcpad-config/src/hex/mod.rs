//! Hex color parsing.
//!
//! Every non-alphanumeric character is stripped first, so `#FF9500`,
//! `FF9500` and `FF-9500` are the same input. The remaining 3, 6 or 8
//! digits are read as RGB, RRGGBB or AARRGGBB. Parsing never fails:
//! anything else comes back as opaque black, tagged as a fallback.

mod scan;


use std::fmt;

use calcpad_common::{Color, Rgba};
use serde::{Deserialize, Serialize};

pub use scan::{scan_hex_prefix, strip_non_alphanumeric};
use scan::STRICT_HEX_RE;

/// Why a string did not parse cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackReason {
    /// Nothing alphanumeric was left after stripping.
    Empty,
    /// The stripped string contains a character that is not a hex digit.
    InvalidDigits,
    /// The stripped length is not 3, 6 or 8.
    UnsupportedLength(usize),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Empty => f.write_str("no hex digits"),
            FallbackReason::InvalidDigits => f.write_str("invalid hex digits"),
            FallbackReason::UnsupportedLength(n) => {
                write!(f, "unsupported length {n} (expected 3, 6 or 8)")
            }
        }
    }
}

/// Result of [`parse_hex_color`]. Both variants carry a displayable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HexColor {
    Parsed(Color),
    Fallback {
        color: Color,
        reason: FallbackReason,
    },
}

impl HexColor {
    pub fn color(&self) -> Color {
        match self {
            HexColor::Parsed(color) | HexColor::Fallback { color, .. } => *color,
        }
    }

    pub fn normalized(&self) -> Rgba {
        self.color().normalized()
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, HexColor::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            HexColor::Parsed(_) => None,
            HexColor::Fallback { reason, .. } => Some(*reason),
        }
    }
}

/// Parse a hex color string.
///
/// | stripped length | layout   | alpha        |
/// |-----------------|----------|--------------|
/// | 3               | RGB      | 255          |
/// | 6               | RRGGBB   | 255          |
/// | 8               | AARRGGBB | from digits  |
/// | other           | -        | opaque black |
///
/// The numeric value is the longest hex run at the start of the stripped
/// string (0 if there is none), so a 3-, 6- or 8-character string with a
/// stray non-hex character still goes through its length branch. A
/// malformed string whose scan yields 0 is opaque black, never the
/// transparent black the 8-digit branch would give.
pub fn parse_hex_color(input: &str) -> HexColor {
    let hex = strip_non_alphanumeric(input);
    let len = hex.chars().count();
    let value = scan_hex_prefix(&hex);
    let color = color_from_value(value, len);

    if hex.is_empty() {
        HexColor::Fallback {
            color,
            reason: FallbackReason::Empty,
        }
    } else if !matches!(len, 3 | 6 | 8) {
        HexColor::Fallback {
            color,
            reason: FallbackReason::UnsupportedLength(len),
        }
    } else if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        HexColor::Fallback {
            color: if value == 0 { Color::OPAQUE_BLACK } else { color },
            reason: FallbackReason::InvalidDigits,
        }
    } else {
        HexColor::Parsed(color)
    }
}

/// Strict check for `#RGB`, `#RRGGBB` or `#AARRGGBB`.
pub fn validate_hex_color(s: &str) -> bool {
    STRICT_HEX_RE.is_match(s.trim())
}

fn color_from_value(value: u64, len: usize) -> Color {
    let channel = |shift: u32| ((value >> shift) & 0xFF) as u8;
    let nibble = |shift: u32| ((value >> shift) & 0xF) as u8 * 17;
    match len {
        3 => Color::rgb(nibble(8), nibble(4), nibble(0)),
        6 => Color::rgb(channel(16), channel(8), channel(0)),
        8 => Color::from_argb(channel(24), channel(16), channel(8), channel(0)),
        _ => Color::OPAQUE_BLACK,
    }
}
