//! Storage Layer - Persistence Contract
//!
//! Synchronous string-keyed get/set, scoped to one owner.
//! Implementations can use memory, files, SQLite, browser storage, etc.

#[cfg(feature = "fs")]
mod file;
mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

use thiserror::Error;

#[cfg(feature = "fs")]
pub use file::FileStorage;
pub use memory::MemoryStorage;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStorage;

/// Backend failures; the store absorbs these, callers never see them
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "sqlite")]
    #[error("sqlite storage failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Key-value persistence consumed by [`crate::GroceryListStore`]
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
