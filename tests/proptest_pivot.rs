//! Property-based tests for parsing and pivoting.
//!
//! Generated exports use plain cells (no quotes, commas or newlines) so the
//! expected values can be computed independently of the parser.

use pnov_bridge::config::PivotConfig;
use pnov_bridge::parsers::{parse_pnov_str, split_csv_line};
use pnov_bridge::generate_bridge_output;
use pnov_bridge::pivot::PivotTables;
use proptest::prelude::*;

const HEADER: &str = "Tracking ID,Status,Reason,DA Name,DSP Name,Route,Latest Attempt,Cost";
const SENTINEL: &str = "SNOWPlatform";

#[derive(Debug, Clone)]
struct Row {
    tracking: String,
    driver: String,
    provider: String,
    route: String,
    cost: String,
}

impl Row {
    fn to_line(&self) -> String {
        format!(
            "{},Missing,Lost,{},{},{},2025-01-01,{}",
            self.tracking, self.driver, self.provider, self.route, self.cost
        )
    }
}

fn driver_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("SNOWPlatform Bot".to_string()),
        Just("Auto SNOWPlatform".to_string()),
        "[A-E][a-z]{0,4}",
    ]
}

fn provider_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[A-D][a-z]{0,3}"]
}

fn cost_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,3}",
        "[0-9]{1,3}\\.[0-9]{2}",
        Just(String::new()),
        Just("n/a".to_string()),
        Just("-5".to_string()),
    ]
}

fn row_strategy() -> impl Strategy<Value = Row> {
    (
        "T[0-9]{1,6}",
        driver_strategy(),
        provider_strategy(),
        "[A-Z]-[0-9]{1,2}",
        cost_strategy(),
    )
        .prop_map(|(tracking, driver, provider, route, cost)| Row {
            tracking,
            driver,
            provider,
            route,
            cost,
        })
}

fn export(rows: &[Row]) -> String {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(&row.to_line());
    }
    text.push('\n');
    text
}

fn tables_for(rows: &[Row]) -> PivotTables {
    PivotTables::compute(&parse_pnov_str(&export(rows)), &PivotConfig::default())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn total_equals_row_count(rows in prop::collection::vec(row_strategy(), 0..60)) {
        prop_assert_eq!(tables_for(&rows).total, rows.len());
    }

    #[test]
    fn provider_counts_sum_to_named_records(rows in prop::collection::vec(row_strategy(), 0..60)) {
        let tables = tables_for(&rows);
        let summed: usize = tables.by_provider.iter().map(|e| e.count).sum();
        let named = rows.iter().filter(|r| !r.provider.is_empty()).count();
        prop_assert_eq!(summed, named);

        for pair in tables.by_provider.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn repeat_drivers_are_exactly_the_qualifying_names(
        rows in prop::collection::vec(row_strategy(), 0..60)
    ) {
        let tables = tables_for(&rows);

        for entry in &tables.repeat_drivers {
            prop_assert!(entry.count > 1);
            prop_assert!(!entry.name.contains(SENTINEL));
            prop_assert!(!entry.name.is_empty());
        }

        for row in &rows {
            if row.driver.is_empty() || row.driver.contains(SENTINEL) {
                continue;
            }
            let occurrences = rows.iter().filter(|r| r.driver == row.driver).count();
            let listed = tables.repeat_drivers.iter().find(|e| e.name == row.driver);
            if occurrences > 1 {
                prop_assert_eq!(listed.map(|e| e.count), Some(occurrences));
            } else {
                prop_assert!(listed.is_none());
            }
        }
    }

    #[test]
    fn high_value_respects_threshold_and_order(
        rows in prop::collection::vec(row_strategy(), 0..60)
    ) {
        let tables = tables_for(&rows);

        for entry in &tables.high_value {
            prop_assert!(entry.cost >= 50.0);
        }
        for pair in tables.high_value.windows(2) {
            prop_assert!(pair[0].cost >= pair[1].cost);
        }
    }

    #[test]
    fn scan_audits_exclude_sentinel_and_empty(
        rows in prop::collection::vec(row_strategy(), 0..60)
    ) {
        let tables = tables_for(&rows);
        let expected = rows
            .iter()
            .filter(|r| !r.driver.is_empty() && !r.driver.contains(SENTINEL))
            .count();
        prop_assert_eq!(tables.scan_audits.len(), expected);
        prop_assert_eq!(tables.perfect_mile.len(), rows.len());
    }

    #[test]
    fn output_is_idempotent(rows in prop::collection::vec(row_strategy(), 0..30)) {
        let text = export(&rows);
        let config = PivotConfig::default();
        prop_assert_eq!(
            generate_bridge_output(&text, &config),
            generate_bridge_output(&text, &config)
        );
    }

    #[test]
    fn quoted_cells_keep_commas(
        left in "[a-z ]{0,10}",
        right in "[a-z ]{0,10}",
    ) {
        let cell = format!("{left},{right}");
        let line = format!("\"a\",\"{cell}\",\"b\"");
        let cells = split_csv_line(&line);
        prop_assert_eq!(cells.len(), 3);
        prop_assert_eq!(&cells[1], &cell);
    }

    #[test]
    fn arbitrary_text_never_panics(s in "\\PC{0,2000}") {
        let tables = PivotTables::compute(&parse_pnov_str(&s), &PivotConfig::default());
        for entry in &tables.high_value {
            prop_assert!(entry.cost.is_finite());
        }
    }
}
