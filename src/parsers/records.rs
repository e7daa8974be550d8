//! Mapping CSV rows to [`PnovRecord`]s.

use super::split_csv_line;
use crate::model::{Dataset, PnovRecord, FIELD_COUNT};

/// Parse a full PNOV export into records.
///
/// The first line is always treated as the header and dropped, blank lines
/// are skipped, and every other line becomes one record. Never fails: short
/// rows get empty fields and a cost of zero.
#[must_use]
pub fn parse_pnov_str(text: &str) -> Dataset {
    let mut skipped_blank = 0usize;
    let records: Vec<PnovRecord> = text
        .lines()
        .skip(1)
        .filter(|line| {
            let keep = !line.trim().is_empty();
            if !keep {
                skipped_blank += 1;
            }
            keep
        })
        .map(|line| map_cells(&split_csv_line(line)))
        .collect();

    tracing::debug!(
        records = records.len(),
        skipped_blank,
        "Parsed PNOV rows"
    );

    Dataset::new(records)
}

/// Map positional cells 0..8 onto a record.
///
/// Missing cells read as empty and cells past the eighth are ignored.
#[must_use]
pub fn map_cells(cells: &[String]) -> PnovRecord {
    let field = |index: usize| -> String {
        cells
            .get(index)
            .map(|cell| strip_quotes(cell))
            .unwrap_or_default()
    };

    if cells.len() < FIELD_COUNT {
        tracing::debug!(
            cells = cells.len(),
            expected = FIELD_COUNT,
            "Short PNOV row, padding missing fields"
        );
    }

    PnovRecord {
        tracking_id: field(0),
        status: field(1),
        reason: field(2),
        driver_name: field(3),
        provider_name: field(4),
        route: field(5),
        latest_attempt: field(6),
        cost: parse_cost(&field(7)),
    }
}

/// Parse a cost cell from its leading number, so `"75.50 USD"` is 75.5.
///
/// Anything without a leading number, or whose number is not finite and
/// strictly positive-signed, is `+0.0`.
#[must_use]
pub fn parse_cost(raw: &str) -> f64 {
    match numeric_prefix(raw.trim_start()).parse::<f64>() {
        Ok(value) if value.is_finite() && value.is_sign_positive() => value,
        _ => 0.0,
    }
}

/// Longest leading `[+-]digits[.digits][e[+-]digits]` run of `s`, or `""`
/// when it has no mantissa digits.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }
    &s[..end]
}

fn strip_quotes(cell: &str) -> String {
    cell.replace('"', "")
}
