//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pivot::{DriverTracking, HighValueEntry, NameCount, PivotTables, RouteTracking};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, tables: &PivotTables, config: &ReportConfig) -> Result<String, ReportError> {
        let report = JsonBridgeReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: "pnov-bridge".to_string(),
                    version: config.metadata.tool_version.clone(),
                },
                generated_at: Utc::now().to_rfc3339(),
                source: config.metadata.source.clone(),
                load_status: config.metadata.load_status.clone(),
                fallback_reason: config.metadata.fallback_reason.clone(),
                template: config
                    .submission
                    .as_ref()
                    .map(|s| s.template.display_name().to_string()),
                owner: config.submission.as_ref().map(|s| s.username.clone()),
                ecd: config.submission.as_ref().map(|s| s.formatted_ecd()),
            },
            total: tables.total,
            high_value_threshold: tables.high_value_threshold,
            by_provider: &tables.by_provider,
            repeat_drivers: &tables.repeat_drivers,
            high_value: &tables.high_value,
            perfect_mile: &tables.perfect_mile,
            scan_audits: &tables.scan_audits,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonBridgeReport<'a> {
    metadata: JsonReportMetadata,
    total: usize,
    high_value_threshold: f64,
    by_provider: &'a [NameCount],
    repeat_drivers: &'a [NameCount],
    high_value: &'a [HighValueEntry],
    perfect_mile: &'a [RouteTracking],
    scan_audits: &'a [DriverTracking],
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ecd: Option<String>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}
