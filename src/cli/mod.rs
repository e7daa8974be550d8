//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler implements the
//! logic for one CLI subcommand and returns the process exit code.

mod records;
mod report;

pub use records::run_records;
pub use report::run_report;

// Re-export config types used by handlers
pub use crate::config::ReportRunConfig;
