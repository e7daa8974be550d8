//! Configuration types for pnov-bridge operations.

use super::defaults::{DEFAULT_HIGH_VALUE_THRESHOLD, DEFAULT_SENTINEL, DEFAULT_STATION};
use crate::parsers::LoadSource;
use crate::reports::ReportFormat;
use crate::template::{FormSubmission, Template};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Application configuration loaded from config files and CLI args.
///
/// CLI arguments are layered on top of file values with
/// [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Pivot table settings (sentinel, threshold)
    pub pivot: PivotConfig,
    /// Output configuration (format, file)
    pub output: OutputConfig,
    /// Template settings (template, station, owner)
    pub template: TemplateConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the platform sentinel substring.
    pub fn sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.config.pivot.sentinel = sentinel.into();
        self
    }

    /// Set the high-value cost threshold.
    pub const fn high_value_threshold(mut self, threshold: f64) -> Self {
        self.config.pivot.high_value_threshold = threshold;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Set the report template.
    pub const fn template(mut self, template: Template) -> Self {
        self.config.template.template = template;
        self
    }

    /// Set the station code.
    pub fn station(mut self, station: impl Into<String>) -> Self {
        self.config.template.station = station.into();
        self
    }

    /// Set the default report owner.
    pub fn owner(mut self, owner: Option<String>) -> Self {
        self.config.template.owner = owner;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Exit non-zero when the input could not be loaded.
    pub const fn fail_on_fallback(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_fallback = fail;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// CLI Overrides
// ============================================================================

/// Values passed explicitly on the command line.
///
/// `None` means the flag was not given and the file value stands. A given
/// value always wins, even when it equals the built-in default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub sentinel: Option<String>,
    pub high_value_threshold: Option<f64>,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub template: Option<Template>,
    pub station: Option<String>,
    /// Switches only turn behavior on.
    pub quiet: bool,
    pub fail_on_fallback: bool,
}

// ============================================================================
// Command Configurations
// ============================================================================

/// Resolved configuration for one `report` run.
#[derive(Debug, Clone)]
pub struct ReportRunConfig {
    /// Where to read the PNOV export from
    pub source: LoadSource,
    /// Pivot settings
    pub pivot: PivotConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Form metadata for templated output
    pub submission: FormSubmission,
    /// Station code for the template header
    pub station: String,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl ReportRunConfig {
    /// Resolve a run from the merged app config and per-run values.
    #[must_use]
    pub fn from_app_config(
        app: &AppConfig,
        source: LoadSource,
        username: Option<String>,
        ecd_date: Option<String>,
    ) -> Self {
        let username = username
            .or_else(|| app.template.owner.clone())
            .unwrap_or_default();
        Self {
            source,
            pivot: app.pivot.clone(),
            output: app.output.clone(),
            submission: FormSubmission::new(app.template.template, username, ecd_date),
            station: app.template.station.clone(),
            behavior: app.behavior.clone(),
        }
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Pivot table settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PivotConfig {
    /// Driver-name substring marking automated platform records.
    /// Matching records are left out of driver-focused tables.
    pub sentinel: String,
    /// Packages costing at least this much are listed as high value
    pub high_value_threshold: f64,
}

impl Default for PivotConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            high_value_threshold: DEFAULT_HIGH_VALUE_THRESHOLD,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Template settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template used for the full report
    pub template: Template,
    /// Station code printed in the report header
    pub station: String,
    /// Default report owner when no username is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            template: Template::default(),
            station: DEFAULT_STATION.to_string(),
            owner: None,
        }
    }
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 when the input could not be loaded
    pub fail_on_fallback: bool,
}
