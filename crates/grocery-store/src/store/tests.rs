//! Store Tests
//!
//! GroceryListStore against in-memory, file and SQLite storage.

use super::GroceryListStore;
use crate::config::StoreConfig;
use crate::domain::{GroceryItem, GroceryList, InputError};
use crate::storage::{KeyValueStorage, MemoryStorage, StorageError};

fn setup_store() -> GroceryListStore<MemoryStorage> {
    GroceryListStore::open(MemoryStorage::new())
}

fn item(text: &str, highlighted: bool) -> GroceryItem {
    GroceryItem {
        text: text.to_string(),
        highlighted,
    }
}

fn snapshot(list: &GroceryList) -> Vec<(String, bool)> {
    list.iter().map(|i| (i.text.clone(), i.highlighted)).collect()
}

/// Storage whose writes always fail
struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

#[test]
fn test_add_trims_and_appends() {
    let mut store = setup_store();
    store.add("milk").unwrap();
    let list = store.add("  eggs \t").unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list.last(), Some(&item("eggs", false)));
}

#[test]
fn test_add_blank_is_rejected() {
    let mut store = setup_store();
    store.add("milk").unwrap();

    assert_eq!(store.add("").unwrap_err(), InputError::Empty);
    assert_eq!(store.add("   ").unwrap_err(), InputError::Empty);
    assert_eq!(snapshot(store.items()), vec![("milk".to_string(), false)]);
}

#[test]
fn test_remove_at_keeps_order() {
    let mut store = setup_store();
    for text in ["milk", "eggs", "bread", "eggs"] {
        store.add(text).unwrap();
    }

    let list = store.remove_at(1);
    let texts: Vec<&str> = list.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, vec!["milk", "bread", "eggs"]);
}

#[test]
fn test_remove_at_out_of_range_is_noop() {
    let mut store = setup_store();
    assert!(store.remove_at(0).is_empty());

    store.add("milk").unwrap();
    store.highlight_last().unwrap();
    let before = store.items().clone();
    assert_eq!(store.remove_at(1), &before);
    assert_eq!(store.remove_at(usize::MAX), &before);
}

#[test]
fn test_highlight_last_moves_highlight() {
    let mut store = setup_store();
    store.add("milk").unwrap();
    store.highlight_last().unwrap();
    store.add("eggs").unwrap();
    store.add("bread").unwrap();

    let list = store.highlight_last().unwrap();
    assert_eq!(list.iter().filter(|i| i.highlighted).count(), 1);
    assert!(list.last().unwrap().highlighted);
}

#[test]
fn test_highlight_and_remove_last_on_empty_list() {
    let mut store = setup_store();
    assert_eq!(store.highlight_last().unwrap_err(), InputError::EmptyList);
    assert_eq!(store.remove_last().unwrap_err(), InputError::EmptyList);
    assert!(store.items().is_empty());
}

#[test]
fn test_clear_always_empties() {
    let mut store = setup_store();
    assert!(store.clear().is_empty());

    store.add("milk").unwrap();
    store.add("eggs").unwrap();
    assert!(store.clear().is_empty());
    assert_eq!(store.storage().get("groceryItems").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_shopping_scenario() {
    let mut store = setup_store();
    store.add("milk").unwrap();
    store.add("eggs").unwrap();

    let list = store.highlight_last().unwrap();
    assert_eq!(list.to_vec(), vec![item("milk", false), item("eggs", true)]);

    let list = store.remove_last().unwrap();
    assert_eq!(list.to_vec(), vec![item("milk", false)]);

    assert!(store.remove_last().unwrap().is_empty());

    assert_eq!(store.remove_last().unwrap_err(), InputError::EmptyList);
    assert!(store.items().is_empty());
}

#[test]
fn test_every_mutation_is_persisted() {
    let mut store = setup_store();
    store.add("milk").unwrap();
    store.add("eggs").unwrap();
    store.highlight_last().unwrap();

    let raw = store.storage().get("groceryItems").unwrap().unwrap();
    assert_eq!(
        raw,
        r#"[{"text":"milk","highlighted":false},{"text":"eggs","highlighted":true}]"#
    );
}

#[test]
fn test_round_trip_through_storage() {
    let mut store = setup_store();
    store.add("milk").unwrap();
    store.add("eggs").unwrap();
    store.highlight_last().unwrap();
    store.add("bread").unwrap();
    let expected = store.items().clone();

    let reopened = GroceryListStore::open(store.into_storage());
    assert_eq!(reopened.items(), &expected);
}

#[test]
fn test_load_malformed_data_is_empty() {
    for raw in ["not json", "{\"text\":\"milk\"}", "[{\"name\":\"milk\"}]", "null"] {
        let store = GroceryListStore::open(MemoryStorage::with_entry("groceryItems", raw));
        assert!(store.items().is_empty(), "expected empty list for {raw:?}");
    }
}

#[test]
fn test_load_invalid_list_is_empty() {
    let two_highlights = r#"[{"text":"milk","highlighted":true},{"text":"eggs","highlighted":true}]"#;
    let blank_text = r#"[{"text":"  ","highlighted":false}]"#;
    for raw in [two_highlights, blank_text] {
        let store = GroceryListStore::open(MemoryStorage::with_entry("groceryItems", raw));
        assert!(store.items().is_empty());
    }
}

#[test]
fn test_load_rereads_storage() {
    let mut store = setup_store();
    store.add("milk").unwrap();
    assert_eq!(store.load().len(), 1);
}

#[test]
fn test_custom_storage_key() {
    let config = StoreConfig {
        storage_key: "activity5".to_string(),
    };
    let mut store = GroceryListStore::with_config(MemoryStorage::new(), &config);
    store.add("milk").unwrap();

    assert_eq!(store.storage_key(), "activity5");
    assert!(store.storage().get("groceryItems").unwrap().is_none());
    assert!(store.storage().get("activity5").unwrap().is_some());
}

#[test]
fn test_storage_failures_stay_soft() {
    let mut store = GroceryListStore::open(BrokenStorage);
    assert!(store.items().is_empty());

    store.add("milk").unwrap();
    store.add("eggs").unwrap();
    assert_eq!(store.remove_last().unwrap().len(), 1);
    assert!(store.clear().is_empty());
}

#[cfg(feature = "fs")]
#[test]
fn test_file_storage_round_trip() {
    use crate::storage::FileStorage;

    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = GroceryListStore::open(FileStorage::open(dir.path()).unwrap());
        store.add("milk").unwrap();
        store.add("eggs").unwrap();
        store.highlight_last().unwrap();
    }

    let store = GroceryListStore::open(FileStorage::open(dir.path()).unwrap());
    assert_eq!(store.items().to_vec(), vec![item("milk", false), item("eggs", true)]);
}

#[cfg(feature = "sqlite")]
#[test]
fn test_sqlite_storage_round_trip() {
    use crate::storage::SqliteStorage;

    let mut store = GroceryListStore::open(SqliteStorage::open_in_memory().unwrap());
    store.add("milk").unwrap();
    store.add("eggs").unwrap();
    store.remove_at(0);
    let expected = store.items().clone();

    let reopened = GroceryListStore::open(store.into_storage());
    assert_eq!(reopened.items(), &expected);
    assert_eq!(snapshot(reopened.items()), vec![("eggs".to_string(), false)]);
}
