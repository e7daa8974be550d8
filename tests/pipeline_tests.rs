//! Pipeline and CLI integration tests.
//!
//! These tests exercise the load → pivot → report pipeline, the degraded
//! load path and the CLI command handlers with real fixture files.

use pnov_bridge::cli::{run_records, run_report};
use pnov_bridge::config::{AppConfig, PivotConfig, ReportRunConfig};
use pnov_bridge::parsers::{LoadOutcome, LoadSource, MAX_INPUT_SIZE};
use pnov_bridge::pipeline::{exit_codes, load_dataset, output_report};
use pnov_bridge::reports::ReportFormat;
use pnov_bridge::template::Template;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn run_config(input: PathBuf, format: ReportFormat, out: PathBuf) -> ReportRunConfig {
    let app = AppConfig::builder()
        .output_format(format)
        .output_file(Some(out))
        .quiet(true)
        .build();
    ReportRunConfig::from_app_config(
        &app,
        LoadSource::File(input),
        Some("jdoe".to_string()),
        Some("2025-06-30".to_string()),
    )
}

// ============================================================================
// Load Stage
// ============================================================================

mod load_stage {
    use super::*;

    #[test]
    fn loads_fixture() {
        let outcome = load_dataset(&LoadSource::File(fixture_path("station_day.csv")), true);
        assert!(matches!(outcome, LoadOutcome::Loaded(_)));
        assert_eq!(outcome.dataset().len(), 7);
        assert_eq!(outcome.status_label(), "loaded");
    }

    #[test]
    fn header_only_is_loaded_not_fallback() {
        let outcome = load_dataset(&LoadSource::File(fixture_path("header_only.csv")), true);
        assert!(!outcome.is_fallback());
        assert!(outcome.dataset().is_empty());
    }

    #[test]
    fn missing_file_is_fallback() {
        let outcome = load_dataset(&LoadSource::File(fixture_path("nope.csv")), true);
        assert!(outcome.is_fallback());
        assert!(outcome.dataset().is_empty());
        let reason = outcome.fallback_reason().unwrap_or_default();
        assert!(reason.contains("nope.csv"), "reason: {reason}");
    }

    #[test]
    fn invalid_utf8_is_fallback() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("binary.csv");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let outcome = load_dataset(&LoadSource::File(path), true);
        assert!(outcome.is_fallback());
        assert!(outcome
            .fallback_reason()
            .unwrap_or_default()
            .contains("UTF-8"));
    }

    #[test]
    fn oversized_file_is_fallback() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("huge.csv");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_INPUT_SIZE + 1).unwrap();

        let outcome = load_dataset(&LoadSource::File(path), true);
        assert!(outcome.is_fallback());
    }
}

// ============================================================================
// Report Stage
// ============================================================================

mod report_stage {
    use super::*;

    #[test]
    fn bridge_report_to_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("bridge.txt");
        let config = run_config(fixture_path("scenario.csv"), ReportFormat::Bridge, out.clone());
        let outcome = load_dataset(&config.source, true);

        output_report(&config, &outcome).unwrap();

        let written = std::fs::read_to_string(out).unwrap();
        assert!(written.starts_with("1. Total PNOV by DSP (sorted Z-A)\n"));
        assert!(written.contains("| DriverB | T2 | $60.00 |"));
    }

    #[test]
    fn full_report_wraps_bridge() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("full.txt");
        let config = run_config(fixture_path("scenario.csv"), ReportFormat::Full, out.clone());
        assert_eq!(config.submission.template, Template::PnovBridge);
        let outcome = load_dataset(&config.source, true);

        output_report(&config, &outcome).unwrap();

        let written = std::fs::read_to_string(out).unwrap();
        assert!(written.starts_with("DMD6 Parcel NOV DPMO Bridge Root Cause Category"));
        assert!(written.contains("\n\n1. Total PNOV by DSP (sorted Z-A)\n"));
        assert!(written.contains("Scan Audits Copy/Paste Format:\nDriverB | T2\n\nActions:\n"));
        assert!(written.ends_with("Owner: jdoe, ECD: 06/30/2025"));
    }

    #[test]
    fn json_report_carries_tables_and_status() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("bridge.json");
        let config = run_config(fixture_path("scenario.csv"), ReportFormat::Json, out.clone());
        let outcome = load_dataset(&config.source, true);

        output_report(&config, &outcome).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["metadata"]["load_status"], "loaded");
        assert_eq!(value["metadata"]["owner"], "jdoe");
        assert_eq!(value["high_value"][0]["tracking_id"], "T2");
    }

    #[test]
    fn custom_threshold_and_sentinel() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("bridge.txt");
        let mut config = run_config(fixture_path("scenario.csv"), ReportFormat::Bridge, out.clone());
        config.pivot = PivotConfig {
            sentinel: "DriverB".to_string(),
            high_value_threshold: 5.0,
        };
        let outcome = load_dataset(&config.source, true);

        output_report(&config, &outcome).unwrap();

        let written = std::fs::read_to_string(out).unwrap();
        assert!(written.contains("3. High Value MM still missing DAs (>= $5)\n"));
        assert!(written.contains("| SNOWPlatform Bot | T1 | $10.00 |"));
        assert!(written.ends_with("Scan Audits Copy/Paste Format:\nSNOWPlatform Bot | T1\n"));
    }
}

// ============================================================================
// CLI Command Handlers
// ============================================================================

mod cli_handlers {
    use super::*;

    #[test]
    fn report_missing_input_exit_codes() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("bridge.txt");

        let config = run_config(fixture_path("absent.csv"), ReportFormat::Bridge, out.clone());
        assert_eq!(run_report(config.clone()).unwrap(), exit_codes::SUCCESS);
        assert!(std::fs::read_to_string(&out)
            .unwrap()
            .contains("Current PNOV Total: 0"));

        let mut strict = config;
        strict.behavior.fail_on_fallback = true;
        assert_eq!(run_report(strict).unwrap(), exit_codes::LOAD_FALLBACK);
    }

    #[test]
    fn report_to_unwritable_path_errors() {
        let config = run_config(
            fixture_path("scenario.csv"),
            ReportFormat::Bridge,
            PathBuf::from("/nonexistent/dir/bridge.txt"),
        );
        assert!(run_report(config).is_err());
    }

    #[test]
    fn records_dumps_json() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("records.json");

        let code = run_records(
            &LoadSource::File(fixture_path("quoted.csv")),
            Some(out.clone()),
            true,
        )
        .unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["reason"], "reason, with comma");
    }
}
