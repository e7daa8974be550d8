//! Pipeline orchestration for bridge reports.
//!
//! Shared load → pivot → report logic used by the CLI command handlers.

mod load;
mod output;
mod report_stage;

pub use load::load_dataset;
pub use output::{write_output, OutputTarget};
pub use report_stage::{build_report_config, output_report};

use crate::config::PivotConfig;
use crate::parsers::parse_pnov_str;
use crate::pivot::PivotTables;
use crate::reports::BridgeReporter;

/// Exit codes for scripted use
pub mod exit_codes {
    /// Report written from a successfully loaded input
    pub const SUCCESS: i32 = 0;
    /// Input could not be loaded and `--fail-on-fallback` was set
    pub const LOAD_FALLBACK: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

/// Parse raw CSV text and render the bridge tables in one step.
///
/// Never fails: malformed rows degrade to empty fields and zero costs.
///
/// ```
/// use pnov_bridge::config::PivotConfig;
/// use pnov_bridge::pipeline::generate_bridge_output;
///
/// let text = generate_bridge_output("header\n", &PivotConfig::default());
/// assert!(text.contains("Current PNOV Total: 0"));
/// ```
#[must_use]
pub fn generate_bridge_output(csv_text: &str, config: &PivotConfig) -> String {
    let dataset = parse_pnov_str(csv_text);
    let tables = PivotTables::compute(&dataset, config);
    BridgeReporter::new().render(&tables)
}
