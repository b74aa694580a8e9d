//! xhairctl - Crosshair Code CLI
//!
//! Decode, encode, normalize and generate crosshair codes from the command
//! line.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod config;
mod error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CliConfig;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "xhairctl")]
#[command(about = "Crosshair Code CLI - Decode, encode and generate crosshair codes")]
#[command(version)]
#[command(long_about = "
xhairctl converts between compact crosshair codes such as `0;P;c;1;o;1;d;1`
and full crosshair profiles, prints the minimal form of a code, and generates
random crosshairs that are always visible.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// YAML configuration file
    #[arg(long, global = true, env = "XHAIRCTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a crosshair code into a full profile
    Decode {
        /// Crosshair code, starting with `0`
        code: String,
        /// List every pair that was skipped
        #[arg(long)]
        report: bool,
    },

    /// Encode a JSON profile into a crosshair code
    Encode {
        /// Profile JSON file, or `-` for stdin
        input: String,
    },

    /// Rewrite a code in its minimal canonical form
    Normalize {
        /// Crosshair code, starting with `0`
        code: String,
    },

    /// Show the settings of a code that differ from the default profile
    Diff {
        /// Crosshair code, starting with `0`
        code: String,
    },

    /// Generate random, always-visible crosshair codes
    Random {
        /// Number of codes to generate
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Resampling cap per crosshair (overrides the config file)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_attempts: Option<u32>,
    },

    /// Pick the preview background for a crosshair
    Background {
        /// Crosshair id
        id: u64,
        /// Crosshair code, starting with `0`
        code: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "xhairctl={log_level},crosshair_codec={log_level},crosshair_preview={log_level}"
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = CliConfig::load(cli.config.as_deref());
    let json = cli.json || config.as_ref().is_ok_and(|c| c.output.json);

    let result = config
        .map_err(anyhow::Error::from)
        .and_then(|config| execute_command(&cli, &config, json));

    // Handle errors with appropriate exit codes
    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            if json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

fn execute_command(cli: &Cli, config: &CliConfig, json: bool) -> Result<()> {
    match &cli.command {
        Commands::Decode { code, report } => commands::code::decode(code, *report, json),
        Commands::Encode { input } => commands::code::encode_profile(input, json),
        Commands::Normalize { code } => commands::code::normalize(code, json),
        Commands::Diff { code } => commands::code::diff(code, json),
        Commands::Random {
            count,
            seed,
            max_attempts,
        } => {
            let max_attempts = max_attempts.unwrap_or(config.randomizer.max_attempts);
            commands::random::execute(*count, *seed, max_attempts, json)
        }
        Commands::Background { id, code } => commands::background::execute(*id, code, json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}
