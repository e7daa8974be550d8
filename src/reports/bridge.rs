//! Bridge text formatter.
//!
//! Renders [`PivotTables`] as three pipe tables, the running total and the
//! two copy/paste blocks. This is the text users paste into the bridge
//! thread, so the layout is fixed.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pivot::PivotTables;
use std::fmt::Write as _;

/// Placeholder for an empty provider name in the DSP table.
pub const UNKNOWN_PROVIDER: &str = "Unknown";

pub const PROVIDER_SECTION_TITLE: &str = "1. Total PNOV by DSP (sorted Z-A)";
pub const REPEAT_DRIVER_SECTION_TITLE: &str = "2. DAs with Over 1 MM still missing";
pub const TOTAL_LABEL: &str = "Current PNOV Total:";
pub const PERFECT_MILE_TITLE: &str = "Perfect Mile Copy/Paste Format:";
pub const SCAN_AUDITS_TITLE: &str = "Scan Audits Copy/Paste Format:";

/// Bridge text reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgeReporter;

impl BridgeReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the bridge text.
    ///
    /// Infallible; [`ReportGenerator::generate`] wraps this.
    #[must_use]
    pub fn render(&self, tables: &PivotTables) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = write_bridge(&mut out, tables);
        out
    }
}

impl ReportGenerator for BridgeReporter {
    fn generate(&self, tables: &PivotTables, _config: &ReportConfig) -> Result<String, ReportError> {
        Ok(self.render(tables))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Bridge
    }
}

/// Title of the high-value section for a given threshold.
#[must_use]
pub fn high_value_section_title(threshold: f64) -> String {
    format!("3. High Value MM still missing DAs (>= ${threshold})")
}

fn write_bridge(out: &mut String, tables: &PivotTables) -> std::fmt::Result {
    writeln!(out, "{PROVIDER_SECTION_TITLE}")?;
    writeln!(out, "| DSP Name | Count |")?;
    writeln!(out, "|----------|-------|")?;
    for entry in &tables.by_provider {
        let name = if entry.name.is_empty() {
            UNKNOWN_PROVIDER
        } else {
            entry.name.as_str()
        };
        writeln!(out, "| {} | {} |", name, entry.count)?;
    }

    writeln!(out)?;
    writeln!(out, "{REPEAT_DRIVER_SECTION_TITLE}")?;
    writeln!(out, "| DA Name | Count |")?;
    writeln!(out, "|---------|-------|")?;
    for entry in &tables.repeat_drivers {
        writeln!(out, "| {} | {} |", entry.name, entry.count)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", high_value_section_title(tables.high_value_threshold))?;
    writeln!(out, "| DA Name | Tracking ID | Cost |")?;
    writeln!(out, "|---------|------------|------|")?;
    for entry in &tables.high_value {
        writeln!(
            out,
            "| {} | {} | ${:.2} |",
            entry.driver_name, entry.tracking_id, entry.cost
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{TOTAL_LABEL} {}", tables.total)?;

    writeln!(out)?;
    writeln!(out, "{PERFECT_MILE_TITLE}")?;
    for pair in &tables.perfect_mile {
        writeln!(out, "{} | {}", pair.route, pair.tracking_id)?;
    }

    writeln!(out)?;
    writeln!(out, "{SCAN_AUDITS_TITLE}")?;
    for pair in &tables.scan_audits {
        writeln!(out, "{} | {}", pair.driver_name, pair.tracking_id)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PivotConfig;
    use crate::model::Dataset;
    use crate::pivot::{HighValueEntry, NameCount};

    fn empty_tables() -> PivotTables {
        PivotTables::compute(&Dataset::empty(), &PivotConfig::default())
    }

    #[test]
    fn test_empty_tables_render_headers_only() {
        let text = BridgeReporter::new().render(&empty_tables());
        let expected = "\
1. Total PNOV by DSP (sorted Z-A)
| DSP Name | Count |
|----------|-------|

2. DAs with Over 1 MM still missing
| DA Name | Count |
|---------|-------|

3. High Value MM still missing DAs (>= $50)
| DA Name | Tracking ID | Cost |
|---------|------------|------|

Current PNOV Total: 0

Perfect Mile Copy/Paste Format:

Scan Audits Copy/Paste Format:
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_cost_has_two_decimals_and_currency() {
        let mut tables = empty_tables();
        tables.high_value = vec![HighValueEntry {
            driver_name: "Dana".into(),
            tracking_id: "T7".into(),
            cost: 75.5,
        }];
        let text = BridgeReporter::new().render(&tables);
        assert!(text.contains("| Dana | T7 | $75.50 |\n"));
    }

    #[test]
    fn test_negative_zero_cost_renders_unsigned() {
        let dataset = crate::parsers::parse_pnov_str("h\nT0,Missing,R,Zed,DSP1,A-1,x,-0\n");
        let config = PivotConfig {
            high_value_threshold: 0.0,
            ..PivotConfig::default()
        };
        let text = BridgeReporter::new().render(&PivotTables::compute(&dataset, &config));
        assert!(text.contains("| Zed | T0 | $0.00 |\n"));
        assert!(!text.contains("$-0.00"));
    }

    #[test]
    fn test_empty_provider_renders_unknown() {
        let mut tables = empty_tables();
        tables.by_provider = vec![NameCount {
            name: String::new(),
            count: 3,
        }];
        let text = BridgeReporter::new().render(&tables);
        assert!(text.contains("| Unknown | 3 |\n"));
    }

    #[test]
    fn test_empty_driver_has_no_placeholder() {
        let mut tables = empty_tables();
        tables.high_value = vec![HighValueEntry {
            driver_name: String::new(),
            tracking_id: "T8".into(),
            cost: 51.0,
        }];
        let text = BridgeReporter::new().render(&tables);
        assert!(text.contains("|  | T8 | $51.00 |\n"));
    }

    #[test]
    fn test_threshold_in_title() {
        assert_eq!(
            high_value_section_title(50.0),
            "3. High Value MM still missing DAs (>= $50)"
        );
        assert_eq!(
            high_value_section_title(99.5),
            "3. High Value MM still missing DAs (>= $99.5)"
        );
    }
}
