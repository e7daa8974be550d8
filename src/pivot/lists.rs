//! Cost-filtered and pass-through record lists.

use crate::model::PnovRecord;
use serde::{Deserialize, Serialize};

/// A package at or above the high-value threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighValueEntry {
    pub driver_name: String,
    pub tracking_id: String,
    pub cost: f64,
}

/// Route and tracking id, the Perfect Mile copy/paste line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTracking {
    pub route: String,
    pub tracking_id: String,
}

/// Driver and tracking id, the Scan Audits copy/paste line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverTracking {
    pub driver_name: String,
    pub tracking_id: String,
}

/// Records costing at least `threshold`, most expensive first.
///
/// Equal costs keep input order.
#[must_use]
pub fn high_value_missing(records: &[PnovRecord], threshold: f64) -> Vec<HighValueEntry> {
    let mut entries: Vec<HighValueEntry> = records
        .iter()
        .filter(|r| r.cost >= threshold)
        .map(|r| HighValueEntry {
            driver_name: r.driver_name.clone(),
            tracking_id: r.tracking_id.clone(),
            cost: r.cost,
        })
        .collect();
    entries.sort_by(|a, b| b.cost.total_cmp(&a.cost));
    entries
}

/// One route/tracking pair per record, in input order.
#[must_use]
pub fn perfect_mile_pairs(records: &[PnovRecord]) -> Vec<RouteTracking> {
    records
        .iter()
        .map(|r| RouteTracking {
            route: r.route.clone(),
            tracking_id: r.tracking_id.clone(),
        })
        .collect()
}

/// Driver/tracking pairs for records with a real driver, in input order.
#[must_use]
pub fn scan_audit_pairs(records: &[PnovRecord], sentinel: &str) -> Vec<DriverTracking> {
    records
        .iter()
        .filter(|r| r.has_countable_driver(sentinel))
        .map(|r| DriverTracking {
            driver_name: r.driver_name.clone(),
            tracking_id: r.tracking_id.clone(),
        })
        .collect()
}
