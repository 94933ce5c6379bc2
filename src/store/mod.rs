//! Query layer over the directory
//!
//! A [`RecordStore`] owns one directory, populated and sorted once. Last
//! names are answered from the directory itself, either by scanning it or by
//! binary search. First names and telephones are answered by building a
//! fresh [`HashIndex`], querying it and destroying it within the same call.

use crate::directory::Directory;
use crate::index::HashIndex;
use crate::infrastructure::hash::KeyField;
use crate::record::{Record, random_records};
use crate::types::Lookup;
use log::debug;
use rand::Rng;
use std::fmt;
use std::time::{Duration, Instant};

/// Retrieval path used to answer a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Last name, unindexed linear scan
    LastNameScan,
    /// Last name, binary search over the sorted directory
    LastNameSorted,
    /// First name, through a hash index
    FirstName,
    /// Telephone, through a hash index
    Telephone,
}

impl SearchKind {
    /// Field name used in "not found" messages
    pub fn label(&self) -> &'static str {
        match self {
            SearchKind::LastNameScan | SearchKind::LastNameSorted => "Last_name",
            SearchKind::FirstName => KeyField::FirstName.label(),
            SearchKind::Telephone => KeyField::Telephone.label(),
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::LastNameScan => write!(f, "Search by last_name (not optimised)"),
            SearchKind::LastNameSorted => write!(f, "Search by last_name (optimised)"),
            SearchKind::FirstName => write!(f, "Search by first_name"),
            SearchKind::Telephone => write!(f, "Search by telephone"),
        }
    }
}

/// In-memory record store
#[derive(Debug, Clone)]
pub struct RecordStore {
    directory: Directory,
}

impl RecordStore {
    /// Append every record, then sort the directory on last names
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut directory: Directory = records.into_iter().collect();
        directory.sort();
        debug!("record store ready with {} records", directory.len());
        Self { directory }
    }

    /// Build a store of `n` random records
    pub fn random<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Self {
        Self::from_records(random_records(rng, n))
    }

    /// Get the sorted directory
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.directory.len()
    }

    /// Check if the store holds no record
    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }

    /// Answer a query through the given retrieval path
    pub fn search(&self, kind: SearchKind, key: &str) -> Lookup<'_> {
        match kind {
            SearchKind::LastNameScan => self.search_last_name(key),
            SearchKind::LastNameSorted => self.search_last_name_sorted(key),
            SearchKind::FirstName => self.search_first_name(key),
            SearchKind::Telephone => self.search_telephone(key),
        }
    }

    /// Last name by linear scan
    pub fn search_last_name(&self, last_name: &str) -> Lookup<'_> {
        self.directory.linear_search(last_name)
    }

    /// Last name by binary search
    pub fn search_last_name_sorted(&self, last_name: &str) -> Lookup<'_> {
        self.directory.binary_search_all(last_name)
    }

    /// First name through a throwaway hash index
    pub fn search_first_name(&self, first_name: &str) -> Lookup<'_> {
        self.search_indexed(KeyField::FirstName, first_name)
    }

    /// Telephone through a throwaway hash index
    pub fn search_telephone(&self, telephone: &str) -> Lookup<'_> {
        self.search_indexed(KeyField::Telephone, telephone)
    }

    fn search_indexed(&self, key_field: KeyField, key: &str) -> Lookup<'_> {
        let index = HashIndex::build(key_field, &self.directory);
        let outcome = index.lookup(&self.directory, key);
        index.destroy();
        outcome
    }

    /// Release every record
    pub fn destroy(self) -> usize {
        self.directory.destroy()
    }
}

/// Run `f` and report how long it took
///
/// Start and end markers stay local to the call.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
