//! Subcommand implementations. Each writes its output to `out` so the
//! binary can target stdout and tests can target a buffer.

use std::io::Write;
use std::path::{Path, PathBuf};

use calcpad_common::{ButtonType, CalcpadError, Rgba};
use calcpad_config::hex::parse_hex_color;
use calcpad_config::{config_to_json, toml_loader, CalcpadConfig, Palette};
use calcpad_ui::{handle_tap, render_outline, ContentView, Node, TapAction, UiMetrics};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::ConfigAction;

type Result<T> = calcpad_common::Result<T>;

/// Build the full screen tree from config.
pub fn build_screen(config: &CalcpadConfig) -> Node {
    let palette = Palette::from_config(&config.palette);
    let metrics = UiMetrics::from_config(config);
    ContentView::from_config(config).build(&palette, &metrics)
}

pub fn run_layout(config: &CalcpadConfig, json: bool, out: &mut impl Write) -> Result<()> {
    let tree = build_screen(config);
    debug!(
        buttons = tree.button_count(),
        depth = tree.depth(),
        "built screen"
    );

    if json {
        let text = serde_json::to_string_pretty(&tree)
            .map_err(|e| CalcpadError::Other(format!("failed to serialize layout: {e}")))?;
        writeln!(out, "{text}")?;
    } else {
        write!(out, "{}", render_outline(&tree))?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ColorReport<'a> {
    input: &'a str,
    hex: String,
    argb: [u8; 4],
    normalized: Rgba,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<String>,
}

pub fn run_color(inputs: &[String], json: bool, out: &mut impl Write) -> Result<()> {
    let reports: Vec<ColorReport> = inputs
        .iter()
        .map(|input| {
            let parsed = parse_hex_color(input);
            let color = parsed.color();
            ColorReport {
                input: input.as_str(),
                hex: color.to_hex(),
                argb: [color.a, color.r, color.g, color.b],
                normalized: parsed.normalized(),
                fallback: parsed.fallback_reason().map(|r| r.to_string()),
            }
        })
        .collect();

    if json {
        let text = serde_json::to_string_pretty(&reports)
            .map_err(|e| CalcpadError::Other(format!("failed to serialize colors: {e}")))?;
        writeln!(out, "{text}")?;
        return Ok(());
    }

    for r in &reports {
        let n = r.normalized;
        let status = match &r.fallback {
            Some(reason) => format!("fallback ({reason})"),
            None => "parsed".to_string(),
        };
        writeln!(
            out,
            "{:<12} {}  a={:.6} r={:.6} g={:.6} b={:.6}  {status}",
            r.input, r.hex, n.alpha, n.red, n.green, n.blue
        )?;
    }
    Ok(())
}

/// Resolve `label` to a button on the screen and run its tap stub.
pub fn run_press(config: &CalcpadConfig, label: &str, out: &mut impl Write) -> Result<()> {
    let canonical = if label.trim().eq_ignore_ascii_case("menu") {
        TapAction::Menu.label()
    } else {
        ButtonType::from_label(label)
            .map(|button| button.label())
            .ok_or_else(|| CalcpadError::Ui(format!("unknown button: {label}")))?
    };

    let action = build_screen(config)
        .find_action(&canonical)
        .ok_or_else(|| CalcpadError::Ui(format!("button {canonical} is not on the screen")))?;

    let message = handle_tap(&action);
    writeln!(out, "{message}")?;
    Ok(())
}

pub fn run_config(
    action: ConfigAction,
    override_path: Option<&Path>,
    config: &CalcpadConfig,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        ConfigAction::Path => {
            writeln!(out, "{}", config_path(override_path)?.display())?;
        }
        ConfigAction::Init => {
            let path = config_path(override_path)?;
            if path.exists() {
                writeln!(out, "config already exists at {}", path.display())?;
            } else {
                toml_loader::create_default_config(&path)?;
                info!("wrote default config");
                writeln!(out, "created {}", path.display())?;
            }
        }
        ConfigAction::Show => {
            writeln!(out, "{}", config_to_json(config))?;
        }
    }
    Ok(())
}

fn config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(p) => Ok(p.to_path_buf()),
        None => Ok(toml_loader::default_config_path()?),
    }
}
