use tracing::debug;

use super::{Candidate, Record};
use crate::error::{RemoveError, ValidationError};
use crate::filter::FilterCriteria;

/// Ordered, append/remove-only collection of committed records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `candidate` and add it at the end. Returns its position.
    ///
    /// A rejected candidate leaves the store untouched.
    pub fn append(&mut self, candidate: Candidate) -> Result<usize, ValidationError> {
        let record = candidate.validate()?;
        debug!(
            "Adding card {} ({}, {})",
            record.name(),
            record.move_name(),
            record.rarity()
        );
        self.records.push(record);
        Ok(self.records.len() - 1)
    }

    /// Remove the selected record; later records shift down by one
    pub fn remove_at(&mut self, selection: Option<usize>) -> Result<Record, RemoveError> {
        let position = selection.ok_or(RemoveError::NoSelection)?;
        if position >= self.records.len() {
            return Err(RemoveError::OutOfRange {
                position,
                len: self.records.len(),
            });
        }
        let record = self.records.remove(position);
        debug!("Removed card {} at position {}", record.name(), position);
        Ok(record)
    }

    /// Records matching `criteria`, in insertion order. The iterator can be
    /// cloned to walk the view again.
    pub fn filter<'a>(
        &'a self,
        criteria: &'a FilterCriteria,
    ) -> impl Iterator<Item = &'a Record> + Clone + 'a {
        self.records.iter().filter(move |r| criteria.matches(r))
    }

    pub fn all(&self) -> impl Iterator<Item = &Record> + Clone {
        self.records.iter()
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
