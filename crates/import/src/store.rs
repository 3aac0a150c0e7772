//! Destination of imported records.

use std::collections::HashSet;

use crate::details::Details;
use crate::error::StoreError;

/// Persists validated records.
pub trait RecordStore {
    /// Stores one record. The record's id is already assigned.
    fn insert(&mut self, details: &Details) -> Result<(), StoreError>;
}

impl<S: RecordStore + ?Sized> RecordStore for &mut S {
    fn insert(&mut self, details: &Details) -> Result<(), StoreError> {
        (**self).insert(details)
    }
}

/// In-memory store, rejecting duplicate ids.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<Details>,
    ids: HashSet<String>,
}

impl MemoryStore {
    /// Stored records in insertion order.
    pub fn records(&self) -> &[Details] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn insert(&mut self, details: &Details) -> Result<(), StoreError> {
        let id = details.id.to_hex();
        if !self.ids.insert(id.clone()) {
            return Err(StoreError::Duplicate(id));
        }
        self.records.push(details.clone());
        Ok(())
    }
}
