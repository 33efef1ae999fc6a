use anyhow::Result;
use clap::Parser;
use pensort_core::{should_use_color, Config, DigitPolicy};
use std::ffi::OsStr;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;
mod session;

use cli::Cli;
use session::{run_session, Settings};

fn main() {
    init_logging();

    let cli = Cli::parse();

    // Load config to get defaults
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("{e}; using default config");
        Config::default()
    });

    let env_no_color = no_color_requested(std::env::var_os("NO_COLOR").as_deref());
    let settings = resolve_settings(cli, &config, env_no_color);

    match run(&settings) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        },
    }
}

fn run(settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(settings, stdin.lock(), stdout.lock())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Any non-empty `NO_COLOR` value disables color, whatever it says.
fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

/// Command-line flags win over the config file.
fn resolve_settings(cli: Cli, config: &Config, env_no_color: bool) -> Settings {
    let digit_policy = if cli.permissive {
        DigitPolicy::Permissive
    } else {
        config.digit_policy()
    };

    Settings {
        root: cli.root,
        operation: cli.operation.map(Into::into),
        preview: cli.preview.map_or_else(|| config.preview(), Into::into),
        use_color: !cli.no_color
            && !env_no_color
            && should_use_color(config.defaults.use_color),
        auto_approve: cli.yes,
        dry_run: cli.dry_run,
        digit_policy,
    }
}
