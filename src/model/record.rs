//! A single PNOV exception record.

use serde::{Deserialize, Serialize};

/// Number of positional fields in a PNOV data row.
pub const FIELD_COUNT: usize = 8;

/// One row of a PNOV export: a package flagged missing on a route.
///
/// Records are built once by the mapper and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PnovRecord {
    /// Package tracking identifier
    pub tracking_id: String,
    /// Delivery status text
    pub status: String,
    /// Exception reason
    pub reason: String,
    /// Driver associate (DA) name, may be empty
    pub driver_name: String,
    /// Dispatch service provider (DSP) name, may be empty
    pub provider_name: String,
    /// Route code
    pub route: String,
    /// Latest attempt timestamp, kept as opaque text
    pub latest_attempt: String,
    /// Package cost; always finite and non-negative
    pub cost: f64,
}

impl PnovRecord {
    /// True when the driver name contains the platform sentinel.
    ///
    /// An empty sentinel matches nothing.
    #[must_use]
    pub fn is_platform_driver(&self, sentinel: &str) -> bool {
        !sentinel.is_empty() && self.driver_name.contains(sentinel)
    }

    /// True when the record names a real driver: non-empty and not a
    /// platform-originated entry.
    #[must_use]
    pub fn has_countable_driver(&self, sentinel: &str) -> bool {
        !self.driver_name.is_empty() && !self.is_platform_driver(sentinel)
    }
}
