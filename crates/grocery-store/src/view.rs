//! List View Model
//!
//! Pure rendering of a list into rows a front end can draw, plus the
//! user-facing messages for rejected intents.

use crate::domain::{GroceryList, InputError};

/// One drawable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    /// Position in the list, passed back to `remove_at`
    pub index: usize,
    pub text: String,
    pub highlighted: bool,
}

impl ItemRow {
    pub fn class(&self) -> &'static str {
        if self.highlighted {
            "grocery-item highlighted"
        } else {
            "grocery-item"
        }
    }
}

/// Placeholder copy shown while the list is empty
pub struct EmptyState;

impl EmptyState {
    pub const TITLE: &'static str = "Your grocery list is empty";
    pub const HINT: &'static str = "Add some items to get started!";
}

/// User actions that can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Add,
    RemoveLast,
    HighlightLast,
    Clear,
}

pub fn render_rows(list: &GroceryList) -> Vec<ItemRow> {
    list.iter()
        .enumerate()
        .map(|(index, item)| ItemRow {
            index,
            text: item.text.clone(),
            highlighted: item.highlighted,
        })
        .collect()
}

/// Message for a rejected intent; `None` for pairs the store never produces
pub fn notice_for(intent: Intent, error: &InputError) -> Option<&'static str> {
    match (intent, error) {
        (Intent::Add, InputError::Empty) => Some("Please enter an item"),
        (Intent::RemoveLast, InputError::EmptyList) => Some("No items to remove"),
        (Intent::HighlightLast, InputError::EmptyList) => Some("No items to highlight"),
        (Intent::Clear, InputError::EmptyList) => Some("List is already empty"),
        _ => None,
    }
}

/// Decide whether Clear All should ask for confirmation.
///
/// An empty list is answered with its notice instead.
pub fn clear_request(list: &GroceryList) -> Result<(), &'static str> {
    if list.is_empty() {
        return Err(notice_for(Intent::Clear, &InputError::EmptyList).unwrap_or_default());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GroceryListStore, MemoryStorage};

    #[test]
    fn test_render_rows() {
        let mut store = GroceryListStore::open(MemoryStorage::new());
        store.add("milk").unwrap();
        store.add("eggs").unwrap();
        store.highlight_last().unwrap();

        let rows = render_rows(store.items());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].class(), "grocery-item");
        assert_eq!(rows[1].text, "eggs");
        assert_eq!(rows[1].class(), "grocery-item highlighted");
    }

    #[test]
    fn test_render_empty() {
        assert!(render_rows(&GroceryList::new()).is_empty());
    }

    #[test]
    fn test_notices() {
        assert_eq!(notice_for(Intent::Add, &InputError::Empty), Some("Please enter an item"));
        assert_eq!(notice_for(Intent::RemoveLast, &InputError::EmptyList), Some("No items to remove"));
        assert_eq!(notice_for(Intent::HighlightLast, &InputError::EmptyList), Some("No items to highlight"));
        assert_eq!(notice_for(Intent::Clear, &InputError::EmptyList), Some("List is already empty"));
        assert_eq!(notice_for(Intent::Add, &InputError::EmptyList), None);
        assert_eq!(notice_for(Intent::RemoveLast, &InputError::Empty), None);
    }

    #[test]
    fn test_rejected_intents_have_notices() {
        let mut store = GroceryListStore::open(MemoryStorage::new());

        let err = store.add("   ").unwrap_err();
        assert_eq!(notice_for(Intent::Add, &err), Some("Please enter an item"));

        let err = store.remove_last().unwrap_err();
        assert_eq!(notice_for(Intent::RemoveLast, &err), Some("No items to remove"));

        let err = store.highlight_last().unwrap_err();
        assert_eq!(notice_for(Intent::HighlightLast, &err), Some("No items to highlight"));
    }

    #[test]
    fn test_clear_request_on_empty_list() {
        let mut store = GroceryListStore::open(MemoryStorage::new());
        assert_eq!(clear_request(store.items()), Err("List is already empty"));

        store.add("milk").unwrap();
        assert_eq!(clear_request(store.items()), Ok(()));

        store.clear();
        assert_eq!(clear_request(store.items()), Err("List is already empty"));
    }
}
