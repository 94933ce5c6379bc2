//! Global type definitions
//!
//! Stores constants and type aliases shared by the directory, the hash index
//! and the query layer

use crate::record::Record;

/// Minimum length of a generated name
pub const NAME_LENGTH_MIN: usize = 3;

/// Maximum length of a last or first name
pub const NAME_LENGTH_MAX: usize = 10;

/// Exact length of a telephone number
pub const TELEPHONE_LENGTH: usize = 8;

/// Number of record slots a fresh directory starts with
pub const DIRECTORY_INITIAL_CAPACITY: usize = 10;

/// Number of bucket slots a fresh hash index starts with
pub const INDEX_INITIAL_SIZE: usize = 10;

/// Load factor above which the hash index doubles its slot count
pub const INDEX_MAX_LOAD_FACTOR: f64 = 0.5;

/// Position of a record inside the directory storage
pub type RecordId = usize;

/// Outcome of a query against the directory or the hash index
///
/// `Found` never holds an empty vector: a query with no match is reported
/// as `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// At least one record matched
    Found(Vec<&'a Record>),
    /// No record matched
    NotFound,
}

impl<'a> Lookup<'a> {
    /// Build an outcome from collected matches
    pub fn from_matches(matches: Vec<&'a Record>) -> Self {
        if matches.is_empty() {
            Lookup::NotFound
        } else {
            Lookup::Found(matches)
        }
    }

    /// Check whether the query missed
    pub fn is_not_found(&self) -> bool {
        matches!(self, Lookup::NotFound)
    }

    /// Number of matched records
    pub fn len(&self) -> usize {
        match self {
            Lookup::Found(records) => records.len(),
            Lookup::NotFound => 0,
        }
    }

    /// Matched records, empty on a miss
    pub fn records(&self) -> &[&'a Record] {
        match self {
            Lookup::Found(records) => records,
            Lookup::NotFound => &[],
        }
    }
}
