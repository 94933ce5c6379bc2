//! Record structure for one directory entry

use crate::error::{StoreError, StoreResult};
use crate::types::{NAME_LENGTH_MAX, TELEPHONE_LENGTH};
use serde::Serialize;
use std::fmt;

/// Directory entry
///
/// Stores the three fields of an entry:
/// - last_name: at most 10 printable characters, sort key of the directory
/// - first_name: at most 10 printable characters, key of the first name index
/// - telephone: exactly 8 decimal digits, key of the telephone index
///
/// Fields are validated once in [`Record::new`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    last_name: String,
    first_name: String,
    telephone: String,
}

impl Record {
    /// Create a new record, validating every field
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        telephone: impl Into<String>,
    ) -> StoreResult<Self> {
        let last_name = last_name.into();
        let first_name = first_name.into();
        let telephone = telephone.into();

        if !is_valid_name(&last_name) {
            return Err(StoreError::InvalidLastName(last_name));
        }
        if !is_valid_name(&first_name) {
            return Err(StoreError::InvalidFirstName(first_name));
        }
        if !is_valid_telephone(&telephone) {
            return Err(StoreError::InvalidTelephone(telephone));
        }

        Ok(Self {
            last_name,
            first_name,
            telephone,
        })
    }

    /// Get last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Get first name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Get telephone
    pub fn telephone(&self) -> &str {
        &self.telephone
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} : {}",
            self.last_name, self.first_name, self.telephone
        )
    }
}

/// Names are limited to printable ASCII so that byte order equals character order
fn is_valid_name(name: &str) -> bool {
    name.len() <= NAME_LENGTH_MAX && name.bytes().all(|b| b.is_ascii_graphic() || b == b' ')
}

fn is_valid_telephone(telephone: &str) -> bool {
    telephone.len() == TELEPHONE_LENGTH && telephone.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("SMITH", "JOHN", "12345678").unwrap();
        assert_eq!(record.last_name(), "SMITH");
        assert_eq!(record.first_name(), "JOHN");
        assert_eq!(record.telephone(), "12345678");
    }

    #[test]
    fn test_record_display() {
        let record = Record::new("JONES", "BOB", "11112222").unwrap();
        assert_eq!(record.to_string(), "JONES BOB : 11112222");
    }

    #[test]
    fn test_record_empty_names_allowed() {
        let record = Record::new("", "", "00000000").unwrap();
        assert_eq!(record.last_name(), "");
        assert_eq!(record.first_name(), "");
    }

    #[test]
    fn test_record_name_too_long() {
        let err = Record::new("ABCDEFGHIJK", "JOHN", "12345678").unwrap_err();
        assert!(matches!(err, StoreError::InvalidLastName(_)));

        let err = Record::new("SMITH", "ABCDEFGHIJK", "12345678").unwrap_err();
        assert!(matches!(err, StoreError::InvalidFirstName(_)));

        // Exactly ten characters is the limit
        assert!(Record::new("ABCDEFGHIJ", "ABCDEFGHIJ", "12345678").is_ok());
    }

    #[test]
    fn test_record_name_not_printable() {
        let err = Record::new("SMI\nTH", "JOHN", "12345678").unwrap_err();
        assert!(matches!(err, StoreError::InvalidLastName(_)));

        let err = Record::new("SMITH", "JÖHN", "12345678").unwrap_err();
        assert!(matches!(err, StoreError::InvalidFirstName(_)));
    }

    #[test]
    fn test_record_invalid_telephone() {
        for bad in ["1234567", "123456789", "1234567a", "", "12 45678"] {
            let err = Record::new("SMITH", "JOHN", bad).unwrap_err();
            assert!(matches!(err, StoreError::InvalidTelephone(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_record_serialize() {
        let record = Record::new("SMITH", "ANNA", "87654321").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"last_name":"SMITH","first_name":"ANNA","telephone":"87654321"}"#
        );
    }
}
