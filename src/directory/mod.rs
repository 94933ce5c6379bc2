//! Directory module owning every record of the store
//!
//! This module implements the record directory with the following features:
//! - Growable storage starting at 10 slots, doubled whenever it is full
//! - In-place quicksort on last names (Lomuto partition, not stable)
//! - Linear scan and binary search with expansion over duplicate last names
//!
//! The directory is the sole owner of its records. Other structures, such as
//! the hash index, refer to records through their [`RecordId`].

mod search;
mod sort;

use crate::record::Record;
use crate::types::{DIRECTORY_INITIAL_CAPACITY, RecordId};
use log::debug;

/// Growable array of owned records
#[derive(Debug, Clone)]
pub struct Directory {
    records: Vec<Record>,
    /// Logical capacity, always 10 * 2^k
    capacity: usize,
}

impl Directory {
    /// Create an empty directory with 10 slots
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(DIRECTORY_INITIAL_CAPACITY),
            capacity: DIRECTORY_INITIAL_CAPACITY,
        }
    }

    /// Append a record, doubling the capacity when every slot is in use
    pub fn append(&mut self, record: Record) -> RecordId {
        if self.records.len() == self.capacity {
            self.grow();
        }
        self.records.push(record);
        self.records.len() - 1
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity * 2;
        self.records.reserve_exact(new_capacity - self.records.len());
        debug!(
            "directory grown from {} to {} slots",
            self.capacity, new_capacity
        );
        self.capacity = new_capacity;
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the directory holds no record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of slots currently reserved
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the record stored at `id`
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id)
    }

    /// Iterate over records in storage order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Release every record and the backing storage
    ///
    /// Returns the number of records released.
    pub fn destroy(mut self) -> usize {
        let released = self.records.len();
        self.records.clear();
        self.records.shrink_to_fit();
        debug!("directory destroyed, {} records released", released);
        released
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Record> for Directory {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.append(record);
        }
    }
}

impl FromIterator<Record> for Directory {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut directory = Directory::new();
        directory.extend(iter);
        directory
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
