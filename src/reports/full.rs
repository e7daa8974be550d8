//! Full templated report.

use super::{BridgeReporter, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pivot::PivotTables;
use crate::template::{render_full_report, FormSubmission};

/// Bridge tables wrapped in the template chosen on the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullReporter {
    bridge: BridgeReporter,
}

impl FullReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bridge: BridgeReporter::new(),
        }
    }
}

impl ReportGenerator for FullReporter {
    fn generate(&self, tables: &PivotTables, config: &ReportConfig) -> Result<String, ReportError> {
        let bridge_text = self.bridge.render(tables);
        let default_submission = FormSubmission::default();
        let submission = config.submission.as_ref().unwrap_or(&default_submission);
        Ok(render_full_report(&bridge_text, submission, &config.station))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Full
    }
}
