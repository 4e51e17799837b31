mod cli;
mod summary;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tokensmith::Config;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    let config = Config::discover(cli.config.as_deref()).context("loading configuration")?;
    let config = cli.apply(config);
    tracing::debug!(?config, "configuration");

    match &cli.command {
        Command::Build { .. } => {
            let build = tokensmith::build(&config)?;
            summary::print_build(&build);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { strict } => {
            let emission = tokensmith::compile(&config)?;
            summary::print_check(&emission);
            if *strict && emission.has_warnings() {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Deprecated { json } => {
            let emission = tokensmith::compile(&config)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&emission.deprecated)?);
            } else {
                summary::print_deprecated(&emission.deprecated);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// `RUST_LOG` wins over `-v`.
fn init_logging(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
