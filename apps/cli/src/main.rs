//! # tabsplit
//!
//! Command-line shell for the split engine.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tabsplit compute bill.json           → summary on stdout              │
//! │  tabsplit compute bill.json --json    → EngineResult as JSON           │
//! │  tabsplit apportion 1000 3            → 334 / 333 / 333                │
//! │                                                                         │
//! │  exit 0: split computed   exit 1: bad input   exit 2: unassigned items │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod config;
mod error;
mod telemetry;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

#[derive(Parser, Debug)]
#[command(
    name = "tabsplit",
    about = "Split a restaurant bill to the cent",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a bill described by a JSON file
    Compute(ComputeArgs),
    /// Divide an amount of cents into near-equal shares
    Apportion(ApportionArgs),
}

#[derive(Args, Debug)]
struct ComputeArgs {
    /// Path to the bill configuration (JSON)
    file: PathBuf,
    /// Print the engine result as JSON instead of a summary
    #[arg(long)]
    json: bool,
    /// Override the configured currency symbol
    #[arg(long)]
    currency_symbol: Option<String>,
}

#[derive(Args, Debug)]
struct ApportionArgs {
    /// Amount to divide, in cents
    #[arg(allow_negative_numbers = true)]
    total_cents: i64,
    /// Number of shares
    count: usize,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> CliResult<u8> {
    let cli = Cli::parse();
    let config = CliConfig::load()?;
    telemetry::init(&config)?;

    let report = match cli.command {
        Command::Compute(args) => {
            let config = config.with_currency_symbol(args.currency_symbol)?;
            let json = fs::read_to_string(&args.file).map_err(|source| CliError::Io {
                path: args.file.clone(),
                source,
            })?;
            debug!(path = %args.file.display(), bytes = json.len(), "Loaded bill");
            commands::run_compute(&json, args.json, &config.currency_symbol)?
        }
        Command::Apportion(args) => commands::run_apportion(args.total_cents, args.count)?,
    };

    report.emit();
    Ok(report.exit_code)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compute() {
        let cli = Cli::try_parse_from([
            "tabsplit",
            "compute",
            "bill.json",
            "--json",
            "--currency-symbol",
            "€",
        ])
        .unwrap();

        match cli.command {
            Command::Compute(args) => {
                assert_eq!(args.file, PathBuf::from("bill.json"));
                assert!(args.json);
                assert_eq!(args.currency_symbol.as_deref(), Some("€"));
            }
            other => panic!("expected compute, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_apportion() {
        let cli = Cli::try_parse_from(["tabsplit", "apportion", "1000", "3"]).unwrap();
        match cli.command {
            Command::Apportion(args) => {
                assert_eq!(args.total_cents, 1000);
                assert_eq!(args.count, 3);
            }
            other => panic!("expected apportion, got {other:?}"),
        }

        // Negative totals reach validation instead of being read as flags.
        let cli = Cli::try_parse_from(["tabsplit", "apportion", "-5", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Apportion(ApportionArgs { total_cents: -5, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_negative_count() {
        assert!(Cli::try_parse_from(["tabsplit", "apportion", "10", "-1"]).is_err());
    }
}
