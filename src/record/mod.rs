//! Record module for directory entries
//!
//! This module implements the entry type stored by the directory:
//! - Field validation at construction (names up to 10 printable characters,
//!   telephone of exactly 8 digits)
//! - Display and JSON rendering of an entry
//! - Random generation of entries for populating a directory

pub mod generator;
pub mod record;

pub use generator::{random_record, random_records};
pub use record::Record;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
