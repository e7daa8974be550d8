//! Default values for pnov-bridge configuration.

/// Driver-name marker for automated platform records.
pub const DEFAULT_SENTINEL: &str = "SNOWPlatform";

/// Cost at or above which a missing package is high value.
pub const DEFAULT_HIGH_VALUE_THRESHOLD: f64 = 50.0;

/// Station code printed in the template header.
pub const DEFAULT_STATION: &str = "DMD6";
