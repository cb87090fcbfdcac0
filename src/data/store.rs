//! Measurement Store Module
//! Ordered, authoritative collection of measurement records.

use crate::data::Measurement;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no measurement at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Insertion-ordered list of measurements.
///
/// Every mutation bumps `revision`; the chart projector compares revisions
/// to know when to resynchronize.
#[derive(Debug, Default)]
pub struct MeasurementStore {
    records: Vec<Measurement>,
    revision: u64,
}

impl MeasurementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with [`Measurement::seed`].
    pub fn seeded() -> Self {
        Self {
            records: Measurement::seed(),
            revision: 1,
        }
    }

    pub fn append(&mut self, record: Measurement) {
        self.records.push(record);
        self.revision += 1;
    }

    /// Remove the record at `index`, keeping the order of the others.
    pub fn remove_at(&mut self, index: usize) -> Result<Measurement, StoreError> {
        if index >= self.records.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        let removed = self.records.remove(index);
        self.revision += 1;
        Ok(removed)
    }

    pub fn all(&self) -> &[Measurement] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
