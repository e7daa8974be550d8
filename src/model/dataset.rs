//! Ordered collection of PNOV records.

use super::PnovRecord;
use serde::{Deserialize, Serialize};

/// PNOV records in input row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<PnovRecord>,
}

impl Dataset {
    /// Wrap records, keeping their order.
    #[must_use]
    pub const fn new(records: Vec<PnovRecord>) -> Self {
        Self { records }
    }

    /// An empty dataset.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[must_use]
    pub fn records(&self) -> &[PnovRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PnovRecord> {
        self.records.iter()
    }

    /// Consume and return the records.
    #[must_use]
    pub fn into_records(self) -> Vec<PnovRecord> {
        self.records
    }
}

impl From<Vec<PnovRecord>> for Dataset {
    fn from(records: Vec<PnovRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a PnovRecord;
    type IntoIter = std::slice::Iter<'a, PnovRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
