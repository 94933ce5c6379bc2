// Quicksort of the directory on last names

use crate::directory::Directory;
use crate::record::Record;
use log::debug;

impl Directory {
    /// Sort records by last name, comparing bytes
    ///
    /// Quicksort with a Lomuto partition: the pivot is the first element of
    /// each range. Records sharing a last name may end up in any relative
    /// order.
    pub fn sort(&mut self) {
        quick_sort(&mut self.records);
        debug!("directory sorted, {} records", self.records.len());
    }

    /// Check that adjacent records are ordered by last name
    pub fn is_sorted(&self) -> bool {
        self.records
            .windows(2)
            .all(|pair| pair[0].last_name() <= pair[1].last_name())
    }
}

/// Iterative quicksort over half-open ranges
///
/// The larger side is pushed first so the smaller one is handled next, which
/// keeps the pending stack at O(log n) even on already sorted input.
fn quick_sort(records: &mut [Record]) {
    let mut pending = vec![(0, records.len())];

    while let Some((lo, hi)) = pending.pop() {
        if hi - lo < 2 {
            continue;
        }

        let pivot = lo + partition(&mut records[lo..hi]);
        let left = (lo, pivot);
        let right = (pivot + 1, hi);

        if left.1 - left.0 > right.1 - right.0 {
            pending.push(left);
            pending.push(right);
        } else {
            pending.push(right);
            pending.push(left);
        }
    }
}

/// Lomuto partition of a non-empty range, returns the final pivot position
fn partition(records: &mut [Record]) -> usize {
    let last = records.len() - 1;

    // Pivot is the first element, parked at the end during the scan
    records.swap(0, last);

    let mut boundary = 0;
    for k in 0..last {
        if records[k].last_name() < records[last].last_name() {
            records.swap(k, boundary);
            boundary += 1;
        }
    }

    records.swap(boundary, last);
    boundary
}
