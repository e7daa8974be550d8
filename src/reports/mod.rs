//! Report generation for pivot tables.
//!
//! Output formats:
//! - Bridge: the pipe tables and copy/paste blocks
//! - Full: bridge text inside the selected template
//! - JSON: structured tables for programmatic consumers
//!
//! [`read_sections`] goes the other way, splitting bridge text back into
//! its parts.

mod bridge;
mod full;
mod json;
mod sections;
mod types;

pub use bridge::{high_value_section_title, BridgeReporter, UNKNOWN_PROVIDER};
pub use full::FullReporter;
pub use json::JsonReporter;
pub use sections::{read_sections, BridgeSections, MarkdownTable};
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::pivot::PivotTables;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from pivot tables
    fn generate(&self, tables: &PivotTables, config: &ReportConfig) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Bridge => Box::new(BridgeReporter::new()),
        ReportFormat::Full => Box::new(FullReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
