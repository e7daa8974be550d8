//! Pivot tables over a PNOV dataset.
//!
//! Every function here is pure: the same records always produce the same
//! tables, each call builds its own tally, and nothing is cached between
//! calls. Sorting is stable so equal counts or costs stay in first-seen order.

mod counts;
mod lists;

pub use counts::{provider_counts, repeat_driver_counts, NameCount};
pub use lists::{
    high_value_missing, perfect_mile_pairs, scan_audit_pairs, DriverTracking, HighValueEntry,
    RouteTracking,
};

use crate::config::PivotConfig;
use crate::model::Dataset;
use serde::{Deserialize, Serialize};

/// All derived tables for one bridge report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotTables {
    /// Record count per DSP, highest first
    pub by_provider: Vec<NameCount>,
    /// DAs with more than one missing package, highest first
    pub repeat_drivers: Vec<NameCount>,
    /// Packages at or above the threshold, most expensive first
    pub high_value: Vec<HighValueEntry>,
    /// Threshold used for `high_value`
    pub high_value_threshold: f64,
    /// Number of records in the dataset
    pub total: usize,
    /// Route/tracking lines, input order
    pub perfect_mile: Vec<RouteTracking>,
    /// Driver/tracking lines without platform entries, input order
    pub scan_audits: Vec<DriverTracking>,
}

impl PivotTables {
    /// Compute every table for `dataset`.
    #[must_use]
    pub fn compute(dataset: &Dataset, config: &PivotConfig) -> Self {
        let records = dataset.records();
        let sentinel = config.sentinel.as_str();

        Self {
            by_provider: provider_counts(records),
            repeat_drivers: repeat_driver_counts(records, sentinel),
            high_value: high_value_missing(records, config.high_value_threshold),
            high_value_threshold: config.high_value_threshold,
            total: records.len(),
            perfect_mile: perfect_mile_pairs(records),
            scan_audits: scan_audit_pairs(records, sentinel),
        }
    }

    /// True when the source dataset had no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}
