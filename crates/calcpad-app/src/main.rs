mod cli;
mod commands;

use calcpad_common::ConfigError;
use calcpad_config::CalcpadConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use cli::{Args, Command};

const DEFAULT_DIRECTIVE: &str = "calcpad=info";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn load_config(args: &Args) -> Result<CalcpadConfig, ConfigError> {
    match args.config.as_deref() {
        Some(path) => calcpad_config::load_config_from(path),
        None => calcpad_config::load_config(),
    }
}

/// `--log-level` wins, then the config's `logging.level`, then the default.
fn filter_directive(log_level: Option<&str>, config: Option<&CalcpadConfig>) -> Directive {
    let directive = match (log_level, config) {
        (Some(level), _) => level.to_string(),
        (None, Some(config)) => {
            format!("calcpad={}", config.logging.level.to_ascii_lowercase())
        }
        (None, None) => DEFAULT_DIRECTIVE.to_string(),
    };

    directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log directive {directive:?} ({e}), using {DEFAULT_DIRECTIVE}");
        DEFAULT_DIRECTIVE
            .parse()
            .expect("default log directive is valid")
    })
}

fn env_filter(directive: Directive) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(directive)
}

/// Install the subscriber before anything logs. The filter is reloadable so
/// the config's level can take over once the file has been read.
fn init_logging(args: &Args) -> FilterHandle {
    let filter = env_filter(filter_directive(args.log_level.as_deref(), None));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    handle
}

fn run(args: &Args, config: &CalcpadConfig) -> calcpad_common::Result<()> {
    let mut out = std::io::stdout().lock();
    match &args.command {
        Command::Layout { json } => commands::run_layout(config, *json, &mut out),
        Command::Color { hex, json } => commands::run_color(hex, *json, &mut out),
        Command::Press { label } => commands::run_press(config, label, &mut out),
        Command::Config { action } => {
            commands::run_config(*action, args.config.as_deref(), config, &mut out)
        }
    }
}

fn main() {
    let args = cli::parse();
    let filter_handle = init_logging(&args);
    tracing::debug!("calcpad v{} starting", env!("CARGO_PKG_VERSION"));

    // `config init` must work before a config file exists.
    let init_only = matches!(
        args.command,
        Command::Config {
            action: cli::ConfigAction::Init | cli::ConfigAction::Path
        }
    );
    let config = if init_only {
        CalcpadConfig::default()
    } else {
        load_config(&args).unwrap_or_else(|e| {
            tracing::warn!("config load failed, using defaults: {e}");
            CalcpadConfig::default()
        })
    };

    if args.log_level.is_none() {
        let filter = env_filter(filter_directive(None, Some(&config)));
        if let Err(e) = filter_handle.reload(filter) {
            tracing::warn!("failed to apply logging.level from config: {e}");
        }
    }

    if let Err(e) = run(&args, &config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_log_level_wins_over_config() {
        let mut config = CalcpadConfig::default();
        config.logging.level = "warn".into();
        let directive = filter_directive(Some("debug"), Some(&config));
        assert_eq!(directive.to_string(), "debug");
    }

    #[test]
    fn config_level_applies_to_calcpad_targets() {
        let mut config = CalcpadConfig::default();
        config.logging.level = "WARN".into();
        let directive = filter_directive(None, Some(&config));
        assert_eq!(directive.to_string(), "calcpad=warn");
    }

    #[test]
    fn startup_filter_uses_default() {
        assert_eq!(filter_directive(None, None).to_string(), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn invalid_directive_falls_back_to_default() {
        let directive = filter_directive(Some("calcpad=[{"), None);
        assert_eq!(directive.to_string(), DEFAULT_DIRECTIVE);
    }
}
