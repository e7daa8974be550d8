//! Report output stage.

use crate::config::ReportRunConfig;
use crate::parsers::{LoadOutcome, LoadSource};
use crate::pivot::PivotTables;
use crate::reports::{create_reporter, ReportConfig, ReportMetadata};
use anyhow::{Context, Result};

use super::{write_output, OutputTarget};

/// Build the reporter configuration for a run and its load outcome.
#[must_use]
pub fn build_report_config(config: &ReportRunConfig, outcome: &LoadOutcome) -> ReportConfig {
    let source = match &config.source {
        LoadSource::File(path) => path.to_string_lossy().to_string(),
        LoadSource::Stdin => config.source.to_string(),
    };

    ReportConfig {
        submission: Some(config.submission.clone()),
        station: config.station.clone(),
        metadata: ReportMetadata {
            source: Some(source),
            load_status: Some(outcome.status_label().to_string()),
            fallback_reason: outcome.fallback_reason().map(str::to_string),
            ..ReportMetadata::new()
        },
    }
}

/// Pivot the loaded dataset and write the report to the configured target.
pub fn output_report(config: &ReportRunConfig, outcome: &LoadOutcome) -> Result<()> {
    let tables = PivotTables::compute(outcome.dataset(), &config.pivot);
    let report_config = build_report_config(config, outcome);

    let reporter = create_reporter(config.output.format);
    tracing::debug!(
        "Rendering {} report for {} records",
        reporter.format(),
        tables.total
    );
    let report = reporter
        .generate(&tables, &report_config)
        .with_context(|| format!("Failed to generate {} report", reporter.format()))?;

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&report, &target, config.behavior.quiet)
}
