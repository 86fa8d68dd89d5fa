use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calcpad: calculator pad layout and color tooling.
#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. debug, calcpad=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the screen's view tree.
    Layout {
        /// Emit JSON instead of an outline.
        #[arg(long)]
        json: bool,
    },
    /// Parse hex colors and print their channels.
    Color {
        /// Hex strings such as "#FF9500", "F00" or "80FF9500".
        #[arg(required = true, allow_hyphen_values = true)]
        hex: Vec<String>,

        #[arg(long)]
        json: bool,
    },
    /// Press a button by label (0-9, + - * / % +/- , AC del =, or a name).
    Press {
        #[arg(allow_hyphen_values = true)]
        label: String,
    },
    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Print the config file path.
    Path,
    /// Write the default config file if none exists.
    Init,
    /// Print the effective config as JSON.
    Show,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_color_with_multiple_values() {
        let args = Args::try_parse_from(["calcpad", "color", "#FF9500", "F00", "--json"]).unwrap();
        match args.command {
            Command::Color { hex, json } => {
                assert_eq!(hex, vec!["#FF9500", "F00"]);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_press_with_minus_label() {
        let args = Args::try_parse_from(["calcpad", "press", "-"]).unwrap();
        assert!(matches!(args.command, Command::Press { label } if label == "-"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "calcpad",
            "layout",
            "--config",
            "/tmp/c.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(matches!(args.command, Command::Layout { json: false }));
    }

    #[test]
    fn color_requires_an_argument() {
        assert!(Args::try_parse_from(["calcpad", "color"]).is_err());
    }
}
