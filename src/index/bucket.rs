//! Bucket chains of the hash index
//!
//! Chains are singly linked lists built on an arena: every node lives in one
//! vector and links to the next node by position. A slot head points at the
//! most recently prepended node, so a chain reads newest first.

use crate::types::RecordId;

type NodeId = usize;

/// One element of a chain
#[derive(Debug, Clone, Copy)]
pub struct BucketEntry {
    /// Record referenced by the entry, owned by the directory
    pub record: RecordId,
    /// Hash of the keyed field, reused when the table is rebuilt
    pub hash: u64,
}

#[derive(Debug, Clone)]
struct BucketNode {
    entry: BucketEntry,
    next: Option<NodeId>,
}

/// Fixed number of slots, each heading a chain
#[derive(Debug, Clone)]
pub struct Buckets {
    heads: Vec<Option<NodeId>>,
    nodes: Vec<BucketNode>,
}

impl Buckets {
    /// Create `slot_count` empty chains
    pub fn new(slot_count: usize) -> Self {
        Self {
            heads: vec![None; slot_count],
            nodes: Vec::new(),
        }
    }

    /// Number of slots
    pub fn slot_count(&self) -> usize {
        self.heads.len()
    }

    /// Total number of entries across every chain
    pub fn entry_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the chain of `slot` holds no entry
    pub fn is_slot_empty(&self, slot: usize) -> bool {
        self.heads[slot].is_none()
    }

    /// Put an entry in front of the chain of `slot`
    pub fn prepend(&mut self, slot: usize, entry: BucketEntry) {
        let node = self.nodes.len();
        self.nodes.push(BucketNode {
            entry,
            next: self.heads[slot],
        });
        self.heads[slot] = Some(node);
    }

    /// Walk the chain of `slot`, newest entry first
    pub fn chain(&self, slot: usize) -> Chain<'_> {
        Chain {
            buckets: self,
            cursor: self.heads[slot],
        }
    }

    /// Walk every chain in slot order
    pub fn entries(&self) -> impl Iterator<Item = BucketEntry> + '_ {
        (0..self.slot_count()).flat_map(move |slot| self.chain(slot))
    }

    /// Drop every chain, keeping the slot count
    pub fn clear(&mut self) {
        self.heads.iter_mut().for_each(|head| *head = None);
        self.nodes.clear();
    }
}

/// Iterator over one chain
pub struct Chain<'a> {
    buckets: &'a Buckets,
    cursor: Option<NodeId>,
}

impl Iterator for Chain<'_> {
    type Item = BucketEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.buckets.nodes[self.cursor?];
        self.cursor = node.next;
        Some(node.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(record: RecordId) -> BucketEntry {
        BucketEntry {
            record,
            hash: record as u64,
        }
    }

    #[test]
    fn test_buckets_new() {
        let buckets = Buckets::new(4);
        assert_eq!(buckets.slot_count(), 4);
        assert_eq!(buckets.entry_count(), 0);
        assert!((0..4).all(|slot| buckets.is_slot_empty(slot)));
    }

    #[test]
    fn test_prepend_order() {
        let mut buckets = Buckets::new(2);
        buckets.prepend(1, entry(10));
        buckets.prepend(1, entry(11));
        buckets.prepend(1, entry(12));

        let chain: Vec<RecordId> = buckets.chain(1).map(|e| e.record).collect();
        assert_eq!(chain, vec![12, 11, 10]);
        assert!(buckets.is_slot_empty(0));
        assert_eq!(buckets.entry_count(), 3);
    }

    #[test]
    fn test_entries_in_slot_order() {
        let mut buckets = Buckets::new(3);
        buckets.prepend(2, entry(1));
        buckets.prepend(0, entry(2));
        buckets.prepend(0, entry(3));

        let all: Vec<RecordId> = buckets.entries().map(|e| e.record).collect();
        assert_eq!(all, vec![3, 2, 1]);
    }

    #[test]
    fn test_clear() {
        let mut buckets = Buckets::new(3);
        buckets.prepend(0, entry(1));
        buckets.prepend(2, entry(2));
        buckets.clear();

        assert_eq!(buckets.slot_count(), 3);
        assert_eq!(buckets.entry_count(), 0);
        assert_eq!(buckets.chain(0).count(), 0);
        assert_eq!(buckets.chain(2).count(), 0);
    }
}
