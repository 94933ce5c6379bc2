//! Hash index module for first name and telephone lookups
//!
//! This module implements a hash table with separate chaining:
//! - Slots start at 10 and double whenever the load factor exceeds 0.5
//! - Chains are arena backed singly linked lists with prepend semantics
//! - Entries refer to records by [`RecordId`]; the directory keeps ownership
//!
//! An index is bound to one [`KeyField`] at creation. Lookups hash the raw
//! query key with [`fnv_hash`], which agrees with the bound extractor because
//! both key fields share that hash routine. The caller must pass a key of the
//! field the index was built on and the directory it was filled from.

pub mod bucket;

use crate::directory::Directory;
use crate::infrastructure::hash::{KeyField, fnv_hash};
use crate::record::Record;
use crate::types::{INDEX_INITIAL_SIZE, INDEX_MAX_LOAD_FACTOR, Lookup, RecordId};
use bucket::{BucketEntry, Buckets};
use log::debug;

/// Separate chaining hash index over directory records
#[derive(Debug, Clone)]
pub struct HashIndex {
    /// Slot array, each slot heading one chain
    buckets: Buckets,
    /// Number of inserted entries
    count: usize,
    /// Field hashed on insertion
    key_field: KeyField,
}

impl HashIndex {
    /// Create an empty index with 10 slots bound to `key_field`
    pub fn new(key_field: KeyField) -> Self {
        Self {
            buckets: Buckets::new(INDEX_INITIAL_SIZE),
            count: 0,
            key_field,
        }
    }

    /// Build an index holding every record of `directory`
    pub fn build(key_field: KeyField, directory: &Directory) -> Self {
        let mut index = Self::new(key_field);
        index.bulk_fill(directory);
        index
    }

    /// Field the index is keyed on
    pub fn key_field(&self) -> KeyField {
        self.key_field
    }

    /// Number of inserted entries
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if nothing was inserted
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots
    pub fn size(&self) -> usize {
        self.buckets.slot_count()
    }

    /// Ratio of entries to slots
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.size() as f64
    }

    /// Insert a reference to `record`, stored in the directory at `id`
    ///
    /// The entry goes in front of the chain at `hash % size`. If the load
    /// factor then exceeds 0.5, the table is rehashed.
    pub fn insert(&mut self, id: RecordId, record: &Record) {
        let hash = self.key_field.hash(record);
        let slot = self.slot_of(hash);
        self.buckets.prepend(slot, BucketEntry { record: id, hash });
        self.count += 1;

        if self.load_factor() > INDEX_MAX_LOAD_FACTOR {
            self.rehash();
        }
    }

    /// Insert every record of `directory` in storage order
    pub fn bulk_fill(&mut self, directory: &Directory) {
        for (id, record) in directory.iter().enumerate() {
            self.insert(id, record);
        }
        debug!(
            "{:?} index filled with {} records, {} slots",
            self.key_field,
            self.count,
            self.size()
        );
    }

    /// Rebuild the table with twice as many slots
    ///
    /// Every entry is prepended again at `hash % new_size`, walking the old
    /// chains in slot order. The entry count is unchanged.
    pub fn rehash(&mut self) {
        let new_size = self.size() * 2;
        let mut rebuilt = Buckets::new(new_size);

        for entry in self.buckets.entries() {
            rebuilt.prepend((entry.hash % new_size as u64) as usize, entry);
        }

        debug!(
            "{:?} index rehashed from {} to {} slots, {} entries",
            self.key_field,
            self.size(),
            new_size,
            self.count
        );
        self.buckets = rebuilt;
    }

    /// Every record of `directory` whose keyed field equals `key`
    pub fn lookup<'a>(&self, directory: &'a Directory, key: &str) -> Lookup<'a> {
        let slot = self.slot_of(fnv_hash(key));
        if self.buckets.is_slot_empty(slot) {
            return Lookup::NotFound;
        }

        Lookup::from_matches(
            self.buckets
                .chain(slot)
                .filter_map(|entry| directory.get(entry.record))
                .filter(|record| self.key_field.extract(record) == key)
                .collect(),
        )
    }

    /// Record ids stored in the chain `key` hashes to, newest first
    #[cfg(test)]
    pub fn chain_of(&self, key: &str) -> Vec<RecordId> {
        let slot = self.slot_of(fnv_hash(key));
        self.buckets.chain(slot).map(|entry| entry.record).collect()
    }

    /// Release every chain and the slot array
    ///
    /// Records are left untouched in their directory. Returns the number of
    /// chain entries released.
    pub fn destroy(mut self) -> usize {
        let released = self.buckets.entry_count();
        self.buckets.clear();
        debug!("{:?} index destroyed, {} entries", self.key_field, released);
        released
    }

    fn slot_of(&self, hash: u64) -> usize {
        (hash % self.size() as u64) as usize
    }
}
