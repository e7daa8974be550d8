//! Reading bridge text back into sections.
//!
//! Presentation code receives the bridge report as one string and needs
//! the pieces separately: each table for rendering and each copy/paste block
//! for its own copy button. Works on bare bridge text and on the full
//! templated report. Missing sections come back empty.

use super::bridge::{PERFECT_MILE_TITLE, SCAN_AUDITS_TITLE, TOTAL_LABEL};
use serde::{Deserialize, Serialize};

/// A pipe-delimited table recovered from text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// The sections of a bridge report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeSections {
    pub provider_table: MarkdownTable,
    pub repeat_driver_table: MarkdownTable,
    pub high_value_table: MarkdownTable,
    pub total: usize,
    pub perfect_mile: Vec<String>,
    pub scan_audits: Vec<String>,
}

/// Split bridge text into its tables, total and copy/paste blocks.
#[must_use]
pub fn read_sections(text: &str) -> BridgeSections {
    let normalized = text.replace("\r\n", "\n");
    let mut sections = BridgeSections::default();

    for block in normalized.split("\n\n") {
        let block = block.trim_matches('\n');
        let mut lines = block.lines();
        let Some(first) = lines.next() else {
            continue;
        };
        let first = first.trim();

        if first.starts_with("1.") {
            sections.provider_table = parse_table(block);
        } else if first.starts_with("2.") {
            sections.repeat_driver_table = parse_table(block);
        } else if first.starts_with("3.") {
            sections.high_value_table = parse_table(block);
        } else if let Some(rest) = first.strip_prefix(TOTAL_LABEL) {
            sections.total = rest.trim().parse().unwrap_or(0);
        } else if first == PERFECT_MILE_TITLE {
            sections.perfect_mile = collect_lines(lines);
        } else if first == SCAN_AUDITS_TITLE {
            sections.scan_audits = collect_lines(lines);
        }
    }

    sections
}

/// Parse a titled pipe table. The separator row is skipped.
fn parse_table(block: &str) -> MarkdownTable {
    let mut lines = block.lines().map(str::trim).filter(|l| !l.is_empty());
    let title = lines.next().unwrap_or_default().to_string();
    let headers = lines.next().map(split_row).unwrap_or_default();
    let rows = lines
        .filter(|line| !is_separator(line))
        .map(split_row)
        .collect();

    MarkdownTable {
        title,
        headers,
        rows,
    }
}

fn split_row(line: &str) -> Vec<String> {
    let inner = line.trim();
    let inner = inner.strip_prefix('|').unwrap_or(inner);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

fn is_separator(line: &str) -> bool {
    line.contains('-') && line.chars().all(|c| matches!(c, '|' | '-' | ' '))
}

fn collect_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
