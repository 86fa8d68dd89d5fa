//! Low-level stripping and scanning helpers for the hex parser.

use regex::Regex;
use std::sync::LazyLock;

/// Anything outside the letter, mark and number categories.
static NON_ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}\p{N}]+").unwrap());

/// `#RGB`, `#RRGGBB` or `#AARRGGBB`.
pub(crate) static STRICT_HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// Remove every character that is not a letter, mark or digit.
pub fn strip_non_alphanumeric(s: &str) -> String {
    NON_ALPHANUMERIC_RE.replace_all(s, "").into_owned()
}

/// Read the longest run of hex digits at the start of `s`, after an
/// optional `0x` prefix. Returns 0 when no digit is found; saturates on
/// overflow.
pub fn scan_hex_prefix(s: &str) -> u64 {
    let digits = match s.get(..2) {
        Some("0x" | "0X") if s[2..].starts_with(|c: char| c.is_ascii_hexdigit()) => &s[2..],
        _ => s,
    };

    let mut value: u64 = 0;
    for c in digits.chars() {
        let Some(d) = c.to_digit(16) else {
            break;
        };
        value = value.saturating_mul(16).saturating_add(u64::from(d));
    }
    value
}
