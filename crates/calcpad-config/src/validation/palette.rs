//! Palette validation: every swatch must be a strict `#` hex color.

use crate::hex::validate_hex_color;
use crate::schema::CalcpadConfig;

pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &CalcpadConfig) {
    let p = &config.palette;
    for (name, value) in [
        ("palette.dark_gray", &p.dark_gray),
        ("palette.orange", &p.orange),
        ("palette.light_gray", &p.light_gray),
    ] {
        if !validate_hex_color(value) {
            errors.push(format!(
                "{name} = {value:?} is not #RGB, #RRGGBB or #AARRGGBB"
            ));
        }
    }
}
