//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = CalcpadConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_loose_palette_color() {
    let mut config = CalcpadConfig::default();
    config.palette.orange = "FF9500".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.orange"));
}

#[test]
fn catches_wrong_length_palette_color() {
    let mut config = CalcpadConfig::default();
    config.palette.dark_gray = "#33333".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.dark_gray"));
}

#[test]
fn accepts_shorthand_and_alpha_palette_colors() {
    let mut config = CalcpadConfig::default();
    config.palette.dark_gray = "#333".into();
    config.palette.light_gray = "#CC505050".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_upper_font_size_too_small() {
    let mut config = CalcpadConfig::default();
    config.display.upper_font_size = 4;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("display.upper_font_size"));
}

#[test]
fn catches_lower_font_size_too_large() {
    let mut config = CalcpadConfig::default();
    config.display.lower_font_size = 200;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("display.lower_font_size"));
}

#[test]
fn catches_padding_too_large() {
    let mut config = CalcpadConfig::default();
    config.layout.padding = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.padding"));
}

#[test]
fn catches_icon_larger_than_button() {
    let mut config = CalcpadConfig::default();
    config.layout.menu_button_size = 24;
    config.layout.menu_icon_size = 30;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("exceeds layout.menu_button_size"));
}

#[test]
fn catches_unknown_log_level() {
    let mut config = CalcpadConfig::default();
    config.logging.level = "verbose".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("logging.level"));
}

#[test]
fn log_level_is_case_insensitive() {
    let mut config = CalcpadConfig::default();
    config.logging.level = "DEBUG".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = CalcpadConfig::default();
    config.palette.light_gray = "gray".into();
    config.display.upper_font_size = 1;
    config.logging.level = "loud".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.light_gray"));
    assert!(err.contains("display.upper_font_size"));
    assert!(err.contains("logging.level"));
}
