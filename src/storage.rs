//! Browser Storage Adapter
//!
//! `window.localStorage` behind the store's key-value contract.

use gloo_storage::{LocalStorage, Storage};
use grocery_store::{KeyValueStorage, StorageError};

/// Handle to the page's localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("getItem failed: {:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("setItem failed: {:?}", e)))
    }
}
