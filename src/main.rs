//! kiro-token-name: safe, deterministic cache filenames for Kiro tokens.
//!
//! Entry point for the application. Parses CLI arguments, initializes
//! logging, and delegates to the appropriate command handler.

#![forbid(unsafe_code)]

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse CLI arguments and dispatch to the appropriate command handler.
///
/// Returns `ExitCode` so the caller can exit without `process::exit`,
/// allowing all destructors (including `Zeroizing`) to run.
fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let found = match &cli.command {
        Commands::Email(args) => commands::email::execute(args)?,
        Commands::IdcId(args) => commands::idc_id::execute(args),
        Commands::Sanitize(args) => {
            commands::sanitize::execute(args);
            true
        }
        Commands::Filename(args) => {
            commands::filename::execute(args)?;
            true
        }
    };

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initialize the stderr logger. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(verbose >= 2)
        .init();
}
