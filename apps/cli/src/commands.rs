//! Subcommand bodies.
//!
//! Each command turns its inputs into a [`Report`] without touching the
//! terminal, so the text and exit status can be checked directly.

use tabsplit_core::summary::{format_summary, format_unassigned};
use tabsplit_core::validation::validate_charge_cents;
use tabsplit_core::{apportion, compute, BillConfig, EngineResult, Money};
use tracing::{debug, warn};

use crate::error::CliResult;

/// Exit status when the bill still has unassigned items.
pub const EXIT_UNASSIGNED: u8 = 2;

/// What a command wants printed, and how the process should exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit_code: u8,
}

impl Report {
    fn success(stdout: String) -> Self {
        Report {
            stdout: Some(stdout),
            stderr: None,
            exit_code: 0,
        }
    }

    /// Writes the report to the terminal.
    pub fn emit(&self) {
        if let Some(out) = &self.stdout {
            println!("{out}");
        }
        if let Some(err) = &self.stderr {
            eprintln!("{err}");
        }
    }
}

/// `tabsplit compute`: decode a bill, split it, render the outcome.
///
/// Text mode prints the summary, or the unassigned-item guidance on
/// stderr. JSON mode prints the [`EngineResult`] either way. Both exit
/// with [`EXIT_UNASSIGNED`] when the split is blocked.
pub fn run_compute(json: &str, as_json: bool, symbol: &str) -> CliResult<Report> {
    let config = BillConfig::from_json(json)?;
    debug!(
        people = config.people.len(),
        items = config.items.len(),
        "Bill decoded"
    );

    let outcome = compute(&config);

    if as_json {
        let result = EngineResult::from(outcome);
        let exit_code = if result.is_success() { 0 } else { EXIT_UNASSIGNED };
        return Ok(Report {
            stdout: Some(serde_json::to_string_pretty(&result)?),
            stderr: None,
            exit_code,
        });
    }

    match outcome {
        Ok(split) => Ok(Report::success(format_summary(&split, &config.people, symbol))),
        Err(err) => {
            warn!(count = err.unassigned_item_ids().len(), "Split blocked");
            Ok(Report {
                stdout: None,
                stderr: Some(format_unassigned(&err, &config.items)),
                exit_code: EXIT_UNASSIGNED,
            })
        }
    }
}

/// `tabsplit apportion`: one share per line, in cents.
pub fn run_apportion(total_cents: i64, count: usize) -> CliResult<Report> {
    let total = Money::from_cents(total_cents);
    validate_charge_cents("total_cents", total)?;

    let lines: Vec<String> = apportion(total, count)
        .iter()
        .map(|share| share.cents().to_string())
        .collect();

    Ok(Report::success(lines.join("\n")))
}

// =============================================================================
// Unit Tests
// =============================================================================
