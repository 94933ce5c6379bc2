//! Infrastructure shared by the storage structures

pub mod hash;
