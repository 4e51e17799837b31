use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tokensmith::{Config, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "tokensmith", version, about = "Resolve design tokens into CSS custom properties")]
pub struct Cli {
    /// Config file (defaults to ./tokensmith.yaml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve every token and write the output document
    Build {
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
        /// Add token descriptions as comments
        #[arg(long)]
        descriptions: bool,
    },
    /// Resolve every token without writing anything
    Check {
        /// Exit with status 1 when any token was dropped
        #[arg(long)]
        strict: bool,
    },
    /// List deprecated tokens and their replacements
    Deprecated {
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Command::Build {
            output,
            format,
            descriptions,
        } = &self.command
        {
            if let Some(output) = output {
                config.output = output.clone();
            }
            if let Some(format) = format {
                config.format = *format;
            }
            config.descriptions |= *descriptions;
        }
        config
    }
}
