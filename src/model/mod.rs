//! Data model for PNOV exports.
//!
//! A [`Dataset`] is an ordered list of [`PnovRecord`]s, one per CSV data row.
//! Everything downstream (pivot tables, reports) is derived from it.

mod dataset;
mod record;

pub use dataset::Dataset;
pub use record::{PnovRecord, FIELD_COUNT};
