//! Report templates and form metadata.
//!
//! The bridge tables are wrapped in a template that adds the root-cause
//! header, the action plan and the owner/ECD line supplied with the upload.

use chrono::NaiveDate;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Available report templates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    /// PNOV bridge: missing-package root cause report
    #[default]
    #[value(alias = "pnov")]
    PnovBridge,
}

impl Template {
    /// Human-readable name, as shown in the template picker.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::PnovBridge => "PNOV Bridge",
        }
    }

    /// Parse a template from its display name or kebab-case id.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "pnov bridge" | "pnov-bridge" | "pnov" => Some(Self::PnovBridge),
            _ => None,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Metadata submitted alongside the CSV upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub template: Template,
    /// Report owner
    pub username: String,
    /// ECD date as entered, normally `YYYY-MM-DD`
    pub ecd_date: Option<String>,
}

impl FormSubmission {
    #[must_use]
    pub fn new(template: Template, username: impl Into<String>, ecd_date: Option<String>) -> Self {
        Self {
            template,
            username: username.into(),
            ecd_date,
        }
    }

    /// ECD date rendered as `MM/DD/YYYY`.
    #[must_use]
    pub fn formatted_ecd(&self) -> String {
        self.ecd_date.as_deref().map(format_ecd_date).unwrap_or_default()
    }
}

/// Convert `YYYY-MM-DD` to `MM/DD/YYYY`.
///
/// Empty input gives an empty string; anything that is not an ISO date is
/// returned unchanged.
#[must_use]
pub fn format_ecd_date(date: &str) -> String {
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%m/%d/%Y").to_string(),
        Err(_) => {
            tracing::debug!("ECD date '{}' is not YYYY-MM-DD, keeping as entered", trimmed);
            trimmed.to_string()
        }
    }
}

const ROOT_CAUSE_CATEGORY: &str = "Parcel NOV DPMO Bridge Root Cause Category: OTR/DSP/ DA";
const BEHAVIOR_ROOT_CAUSE: &str =
    "Behavior Root Cause: Other - Packages missing still missing at EOS MM returned by same DA";
const ACTIONS: &str = "DAs with high value missing still missing packages requested for scan audits. \
PNOV Update sent during shift for Dispatchers to contact DAs and sweep van for packages marked \
missing before returning to station";

/// Wrap bridge tables in the submission's template.
///
/// The result is trimmed of leading and trailing whitespace.
#[must_use]
pub fn render_full_report(bridge_text: &str, submission: &FormSubmission, station: &str) -> String {
    match submission.template {
        Template::PnovBridge => {
            let report = format!(
                "{station} {ROOT_CAUSE_CATEGORY}\n\
                 {BEHAVIOR_ROOT_CAUSE}\n\
                 \n\
                 {bridge_text}\n\
                 \n\
                 Actions:\n\
                 {ACTIONS}\n\
                 Owner: {owner}, ECD: {ecd}\n",
                owner = submission.username,
                ecd = submission.formatted_ecd(),
            );
            report.trim().to_string()
        }
    }
}
