//! Layout configuration validation.

use crate::schema::CalcpadConfig;

use super::helpers::validate_range;

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &CalcpadConfig) {
    let l = &config.layout;
    validate_range(errors, "layout.menu_button_size", l.menu_button_size, 16, 96);
    validate_range(errors, "layout.menu_icon_size", l.menu_icon_size, 8, 96);
    validate_range(errors, "layout.padding", l.padding, 0, 64);

    if l.menu_icon_size > l.menu_button_size {
        errors.push(format!(
            "layout.menu_icon_size = {} exceeds layout.menu_button_size = {}",
            l.menu_icon_size, l.menu_button_size
        ));
    }
}
