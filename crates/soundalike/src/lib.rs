//! # soundalike
//!
//! **CLI Binary**
//!
//! This is the entry point for the `soundalike` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration
//! * Install logging
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod error_hints;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use soundalike_config::{self as cli, Cli, Commands};
use soundalike_core::AnalyzeOptions;
use soundalike_phonetic::DoubleMetaphoneEncoder;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SOUNDALIKE_LOG";

/// Render an error with its context chain and any remediation hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

/// Level used when `SOUNDALIKE_LOG` is unset or invalid.
fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose)));

    // Keep an already-installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by the `soundalike` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let user_config =
        cli::load_config(cli.global.config.as_deref()).context("Failed to load configuration")?;
    let profile = cli::resolve_profile(user_config.as_ref(), cli.global.profile.as_deref())?;
    debug!(
        profile = cli.global.profile.as_deref().unwrap_or(cli::DEFAULT_PROFILE),
        found = profile.is_some(),
        "configuration resolved"
    );

    let encoder = DoubleMetaphoneEncoder::new();

    match cli.command.unwrap_or(Commands::Analyze(cli.analyze)) {
        Commands::Analyze(args) => {
            let settings = cli::resolve_analyze(&args, profile)?;
            info!(
                input = %settings.input.display(),
                format = ?settings.format,
                parallel = settings.parallel,
                "analyzing"
            );
            let options = AnalyzeOptions {
                parallel: settings.parallel,
            };
            let analysis = soundalike_core::analyze_file(
                &settings.input,
                settings.delimiter,
                &encoder,
                options,
            )?;
            soundalike_format::write_report(
                &analysis,
                settings.format,
                settings.top,
                settings.output.as_deref(),
            )?;
        }
        Commands::Explain(args) => {
            let format = cli::resolve_explain_format(&args, profile);
            let items: Vec<_> = args
                .names
                .iter()
                .map(|name| soundalike_core::explain(name, &encoder))
                .collect();
            print!("{}", soundalike_format::render_explanations(&items, format)?);
        }
    }

    Ok(())
}
