//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod display;
mod helpers;
mod layout;
mod misc;
mod palette;

#[cfg(test)]
mod tests;

use crate::schema::CalcpadConfig;
use calcpad_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CalcpadConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    palette::validate_palette(&mut errors, config);
    display::validate_display(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    misc::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
