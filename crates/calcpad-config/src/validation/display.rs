//! Display configuration validation (font sizes).

use crate::schema::CalcpadConfig;

use super::helpers::validate_range;

pub(crate) fn validate_display(errors: &mut Vec<String>, config: &CalcpadConfig) {
    validate_range(
        errors,
        "display.upper_font_size",
        config.display.upper_font_size,
        8,
        96,
    );
    validate_range(
        errors,
        "display.lower_font_size",
        config.display.lower_font_size,
        8,
        128,
    );
}
