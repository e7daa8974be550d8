//! Benchmarks for the parse → pivot → format pipeline.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pnov_bridge::config::PivotConfig;
use pnov_bridge::parsers::parse_pnov_str;
use pnov_bridge::pivot::PivotTables;
use pnov_bridge::reports::BridgeReporter;
use std::fmt::Write as _;
use std::hint::black_box;

const DRIVERS: &[&str] = &[
    "Alice Moore",
    "Ben Ortiz",
    "Cara Lin",
    "SNOWPlatform Auto",
    "Dev Patel",
    "",
];
const PROVIDERS: &[&str] = &["FastCo", "QuickShip", "", "RouteOne"];

/// Build a synthetic export with `rows` data rows.
fn synthetic_export(rows: usize) -> String {
    let mut text =
        String::from("Tracking ID,Status,Reason,DA Name,DSP Name,Route,Latest Attempt,Cost\n");
    for i in 0..rows {
        let _ = writeln!(
            text,
            "\"TBA{i:08}\",Missing,\"Not found, van swept\",{},{},R-{},2025-06-29,{}.{:02}",
            DRIVERS[i % DRIVERS.len()],
            PROVIDERS[i % PROVIDERS.len()],
            i % 40,
            (i * 7) % 150,
            i % 100
        );
    }
    text
}

fn benchmark_pipeline(c: &mut Criterion) {
    let config = PivotConfig::default();
    let mut group = c.benchmark_group("pipeline");

    for rows in [100, 1_000, 10_000] {
        let text = synthetic_export(rows);
        let dataset = parse_pnov_str(&text);
        let tables = PivotTables::compute(&dataset, &config);

        group.bench_with_input(BenchmarkId::new("parse", rows), &text, |b, text| {
            b.iter(|| parse_pnov_str(black_box(text)));
        });
        group.bench_with_input(BenchmarkId::new("pivot", rows), &dataset, |b, dataset| {
            b.iter(|| PivotTables::compute(black_box(dataset), &config));
        });
        group.bench_with_input(BenchmarkId::new("format", rows), &tables, |b, tables| {
            b.iter(|| BridgeReporter::new().render(black_box(tables)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
