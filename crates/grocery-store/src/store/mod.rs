//! Grocery List Store
//!
//! Owns the ordered list and rewrites its persisted mirror in full after
//! every mutation. Never renders UI.

use crate::config::StoreConfig;
use crate::domain::{GroceryItem, GroceryList, InputError};
use crate::storage::KeyValueStorage;

#[cfg(test)]
mod tests;

pub struct GroceryListStore<S> {
    storage: S,
    storage_key: String,
    items: GroceryList,
}

impl<S: KeyValueStorage> GroceryListStore<S> {
    /// Open with the default storage key and load the persisted list
    pub fn open(storage: S) -> Self {
        Self::with_config(storage, &StoreConfig::default())
    }

    /// Open with a custom configuration and load the persisted list
    pub fn with_config(storage: S, config: &StoreConfig) -> Self {
        let mut store = Self {
            storage,
            storage_key: config.storage_key.clone(),
            items: GroceryList::new(),
        };
        store.load();
        store
    }

    /// Re-read the persisted list. Missing, unreadable or invalid data
    /// yields an empty list.
    pub fn load(&mut self) -> &GroceryList {
        self.items = self.read_persisted();
        log::debug!("loaded {} grocery items from '{}'", self.items.len(), self.storage_key);
        &self.items
    }

    fn read_persisted(&self) -> GroceryList {
        let raw = match self.storage.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return GroceryList::new(),
            Err(e) => {
                log::warn!("failed to read '{}': {}", self.storage_key, e);
                return GroceryList::new();
            }
        };

        match serde_json::from_str::<GroceryList>(&raw) {
            Ok(list) if list.validate() => list,
            Ok(_) => {
                log::warn!("discarding invalid grocery list under '{}'", self.storage_key);
                GroceryList::new()
            }
            Err(e) => {
                log::warn!("discarding malformed grocery list under '{}': {}", self.storage_key, e);
                GroceryList::new()
            }
        }
    }

    /// Append trimmed `text` as a new, unhighlighted item
    pub fn add(&mut self, text: &str) -> Result<&GroceryList, InputError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(InputError::Empty);
        }
        self.items.items_mut().push(GroceryItem::new(text.to_string()));
        self.persist();
        Ok(&self.items)
    }

    /// Remove the item at `index`; out-of-range indices leave the list as is
    pub fn remove_at(&mut self, index: usize) -> &GroceryList {
        if index < self.items.len() {
            self.items.items_mut().remove(index);
        }
        self.persist();
        &self.items
    }

    pub fn remove_last(&mut self) -> Result<&GroceryList, InputError> {
        if self.items.items_mut().pop().is_none() {
            return Err(InputError::EmptyList);
        }
        self.persist();
        Ok(&self.items)
    }

    /// Highlight the final item and clear every other highlight
    pub fn highlight_last(&mut self) -> Result<&GroceryList, InputError> {
        let items = self.items.items_mut();
        if items.is_empty() {
            return Err(InputError::EmptyList);
        }
        for item in items.iter_mut() {
            item.highlighted = false;
        }
        if let Some(last) = items.last_mut() {
            last.highlighted = true;
        }
        self.persist();
        Ok(&self.items)
    }

    /// Empty the list. Confirmation is the caller's job.
    pub fn clear(&mut self) -> &GroceryList {
        self.items.items_mut().clear();
        self.persist();
        &self.items
    }

    pub fn items(&self) -> &GroceryList {
        &self.items
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Write the full list. A failed write is logged; in-memory state stays.
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("failed to serialize grocery list: {}", e);
                return;
            }
        };
        match self.storage.set(&self.storage_key, &json) {
            Ok(()) => log::debug!("persisted {} grocery items", self.items.len()),
            Err(e) => log::warn!("failed to persist '{}': {}", self.storage_key, e),
        }
    }
}
