//! Grouped count tables (by provider, by repeat driver).

use crate::model::PnovRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A name with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

/// Count records per provider, highest count first.
///
/// Records without a provider are not counted. Ties keep first-seen order.
#[must_use]
pub fn provider_counts(records: &[PnovRecord]) -> Vec<NameCount> {
    count_by(
        records
            .iter()
            .map(|r| r.provider_name.as_str())
            .filter(|name| !name.is_empty()),
    )
}

/// Count records per driver and keep drivers with more than one, highest
/// count first.
///
/// Empty driver names and names containing `sentinel` are skipped.
#[must_use]
pub fn repeat_driver_counts(records: &[PnovRecord], sentinel: &str) -> Vec<NameCount> {
    let mut counts = count_by(
        records
            .iter()
            .filter(|r| r.has_countable_driver(sentinel))
            .map(|r| r.driver_name.as_str()),
    );
    counts.retain(|entry| entry.count > 1);
    counts
}

/// Count names in iteration order, then stable-sort by count descending.
fn count_by<'a>(names: impl Iterator<Item = &'a str>) -> Vec<NameCount> {
    let mut tally: IndexMap<&str, usize> = IndexMap::new();
    for name in names {
        *tally.entry(name).or_insert(0) += 1;
    }

    let mut counts: Vec<NameCount> = tally
        .into_iter()
        .map(|(name, count)| NameCount {
            name: name.to_string(),
            count,
        })
        .collect();
    // sort_by is stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(driver: &str, provider: &str) -> PnovRecord {
        PnovRecord {
            driver_name: driver.to_string(),
            provider_name: provider.to_string(),
            ..PnovRecord::default()
        }
    }

    fn names(counts: &[NameCount]) -> Vec<(&str, usize)> {
        counts.iter().map(|c| (c.name.as_str(), c.count)).collect()
    }

    #[test]
    fn test_provider_counts_sorted_descending() {
        let records = vec![
            record("a", "Beta"),
            record("b", "Alpha"),
            record("c", "Alpha"),
            record("d", "Gamma"),
            record("e", "Alpha"),
            record("f", "Beta"),
        ];
        assert_eq!(
            names(&provider_counts(&records)),
            vec![("Alpha", 3), ("Beta", 2), ("Gamma", 1)]
        );
    }

    #[test]
    fn test_provider_ties_keep_first_seen_order() {
        let records = vec![
            record("a", "Zed"),
            record("b", "Amp"),
            record("c", "Mid"),
        ];
        assert_eq!(
            names(&provider_counts(&records)),
            vec![("Zed", 1), ("Amp", 1), ("Mid", 1)]
        );
    }

    #[test]
    fn test_provider_counts_skip_empty_and_are_case_sensitive() {
        let records = vec![record("a", ""), record("b", "acme"), record("c", "Acme")];
        assert_eq!(
            names(&provider_counts(&records)),
            vec![("acme", 1), ("Acme", 1)]
        );
    }

    #[test]
    fn test_repeat_drivers_filters_singletons_and_sentinel() {
        let records = vec![
            record("Dana", "P"),
            record("SNOWPlatform Bot", "P"),
            record("Eli", "P"),
            record("Dana", "P"),
            record("SNOWPlatform Bot", "P"),
            record("", "P"),
            record("", "P"),
        ];
        assert_eq!(
            names(&repeat_driver_counts(&records, "SNOWPlatform")),
            vec![("Dana", 2)]
        );
    }

    #[test]
    fn test_repeat_drivers_ties_keep_first_seen_order() {
        let records = vec![
            record("Eli", "P"),
            record("Dana", "P"),
            record("Dana", "P"),
            record("Eli", "P"),
            record("Fay", "P"),
            record("Fay", "P"),
            record("Fay", "P"),
        ];
        assert_eq!(
            names(&repeat_driver_counts(&records, "SNOWPlatform")),
            vec![("Fay", 3), ("Eli", 2), ("Dana", 2)]
        );
    }

    #[test]
    fn test_counts_on_empty_input() {
        assert!(provider_counts(&[]).is_empty());
        assert!(repeat_driver_counts(&[], "SNOWPlatform").is_empty());
    }
}
