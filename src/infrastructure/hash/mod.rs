// Hash functions for index keys

use crate::record::Record;

/// Offset basis of the 32-bit FNV family
pub const OFFSET_BASIS: u64 = 2166136261;

/// Prime of the 32-bit FNV family
pub const FNV_PRIME: u64 = 16777619;

/// FNV hash of a key string
///
/// Each byte is xor-ed into the state, then the state is multiplied by the
/// prime. The 32-bit constants are applied to a 64-bit state with wrapping
/// multiplication, so the result is not the canonical 32-bit FNV value.
pub fn fnv_hash(key: &str) -> u64 {
    let mut hash = OFFSET_BASIS;

    // Process each byte in the key
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }

    hash
}

/// Record field an index is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyField {
    /// Index on first names
    FirstName,
    /// Index on telephone numbers
    Telephone,
}

impl KeyField {
    /// Extract the keyed field from a record
    pub fn extract<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            KeyField::FirstName => record.first_name(),
            KeyField::Telephone => record.telephone(),
        }
    }

    /// Hash the keyed field of a record
    pub fn hash(&self, record: &Record) -> u64 {
        fnv_hash(self.extract(record))
    }

    /// Human readable field name, used in "not found" messages
    pub fn label(&self) -> &'static str {
        match self {
            KeyField::FirstName => "First_name",
            KeyField::Telephone => "Telephone",
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
