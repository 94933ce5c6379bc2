//! Dirstore in-memory directory library

// Global type definitions
pub mod error;
pub mod types;

// Import various modules
pub mod config;
pub mod directory;
pub mod index;
pub mod infrastructure;
pub mod logger;
pub mod menu;
pub mod record;
pub mod store;

// Re-export core items for easier access
pub use directory::Directory;
pub use error::{StoreError, StoreResult};
pub use index::HashIndex;
pub use infrastructure::hash::KeyField;
pub use record::Record;
pub use store::{RecordStore, SearchKind};
pub use types::{Lookup, RecordId};
