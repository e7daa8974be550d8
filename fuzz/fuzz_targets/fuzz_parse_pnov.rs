#![no_main]
use libfuzzer_sys::fuzz_target;
use pnov_bridge::config::PivotConfig;
use pnov_bridge::parsers::parse_pnov_str;
use pnov_bridge::pivot::PivotTables;
use pnov_bridge::reports::BridgeReporter;

/// Fuzz the full parse → pivot → format path, which must never panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let dataset = parse_pnov_str(s);
        for record in dataset.iter() {
            assert!(record.cost.is_finite() && record.cost >= 0.0);
        }
        let tables = PivotTables::compute(&dataset, &PivotConfig::default());
        assert_eq!(tables.total, dataset.len());
        let _ = BridgeReporter::new().render(&tables);
    }
});
