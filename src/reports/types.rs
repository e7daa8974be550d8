//! Report type definitions.

use crate::template::FormSubmission;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Pivot tables and copy/paste sections only
    #[default]
    Bridge,
    /// Bridge tables wrapped in the selected template
    Full,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Bridge => write!(f, "bridge"),
            ReportFormat::Full => write!(f, "full"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Template metadata, used by the full report
    pub submission: Option<FormSubmission>,
    /// Station code printed in the template header
    pub station: String,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            submission: None,
            station: crate::config::DEFAULT_STATION.to_string(),
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// Config carrying a form submission.
    #[must_use]
    pub fn with_submission(submission: FormSubmission) -> Self {
        Self {
            submission: Some(submission),
            ..Default::default()
        }
    }
}

/// Metadata included in structured reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Input file path, or `<stdin>`
    pub source: Option<String>,
    /// `loaded` or `fallback`
    pub load_status: Option<String>,
    /// Why the load fell back, if it did
    pub fallback_reason: Option<String>,
    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}
