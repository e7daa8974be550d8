//! Report command handler.
//!
//! Implements the `report` subcommand: load a PNOV export, pivot it and
//! write the bridge report.

use crate::config::ReportRunConfig;
use crate::pipeline::{exit_codes, load_dataset, output_report};
use anyhow::Result;

/// Run the report command, returning the desired exit code.
///
/// A fallback load still produces a report (with a zero total). The exit
/// code is [`exit_codes::LOAD_FALLBACK`] only when the run asked to fail on
/// fallback.
#[allow(clippy::needless_pass_by_value)]
pub fn run_report(config: ReportRunConfig) -> Result<i32> {
    let outcome = load_dataset(&config.source, config.behavior.quiet);

    output_report(&config, &outcome)?;

    Ok(determine_exit_code(&config, outcome.is_fallback()))
}

const fn determine_exit_code(config: &ReportRunConfig, fell_back: bool) -> i32 {
    if fell_back && config.behavior.fail_on_fallback {
        exit_codes::LOAD_FALLBACK
    } else {
        exit_codes::SUCCESS
    }
}
