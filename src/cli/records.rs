//! Records command handler.
//!
//! Implements the `records` subcommand: dump the parsed records as JSON,
//! which helps check how a raw export was mapped before pivoting.

use crate::model::Dataset;
use crate::parsers::LoadSource;
use crate::pipeline::{exit_codes, load_dataset, write_output, OutputTarget};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Run the records command, returning the desired exit code.
pub fn run_records(source: &LoadSource, output_file: Option<PathBuf>, quiet: bool) -> Result<i32> {
    let outcome = load_dataset(source, quiet);

    let json = records_json(outcome.dataset()).context("Failed to serialize parsed records")?;

    write_output(&json, &OutputTarget::from_option(output_file), quiet)?;

    Ok(exit_codes::SUCCESS)
}

/// Pretty JSON array of the parsed records.
fn records_json(dataset: &Dataset) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(dataset)?)
}
