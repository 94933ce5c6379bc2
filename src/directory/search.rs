// Linear and binary search on last names

use crate::directory::Directory;
use crate::types::{Lookup, RecordId};
use std::cmp::Ordering;

impl Directory {
    /// Scan every record for an exact last name match, in storage order
    pub fn linear_search(&self, last_name: &str) -> Lookup<'_> {
        Lookup::from_matches(
            self.records
                .iter()
                .filter(|record| record.last_name() == last_name)
                .collect(),
        )
    }

    /// Position of one record with the given last name
    ///
    /// The directory must be sorted. Among duplicates, any matching position
    /// may be returned.
    pub fn binary_search(&self, last_name: &str) -> Option<RecordId> {
        self.probe(last_name, 0, self.records.len())
    }

    /// Every record with the given last name, found by binary search
    ///
    /// The directory must be sorted; on an unsorted directory the outcome is
    /// unspecified. One match is located by [`Directory::binary_search`], then
    /// the run of equal last names around it is collected.
    pub fn binary_search_all(&self, last_name: &str) -> Lookup<'_> {
        let Some(found) = self.binary_search(last_name) else {
            return Lookup::NotFound;
        };

        let mut first = found;
        while first > 0 && self.records[first - 1].last_name() == last_name {
            first -= 1;
        }

        let mut last = found;
        while last + 1 < self.records.len() && self.records[last + 1].last_name() == last_name {
            last += 1;
        }

        Lookup::Found(self.records[first..=last].iter().collect())
    }

    /// Recursive probe over `[lo, hi)`
    fn probe(&self, last_name: &str, lo: usize, hi: usize) -> Option<RecordId> {
        if lo == hi {
            return None;
        }

        let mid = lo + (hi - lo) / 2;
        match last_name.cmp(self.records[mid].last_name()) {
            Ordering::Less => self.probe(last_name, lo, mid),
            Ordering::Greater => self.probe(last_name, mid + 1, hi),
            Ordering::Equal => Some(mid),
        }
    }
}
