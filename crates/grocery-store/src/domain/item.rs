//! Grocery Item Entity
//!
//! A single list entry and the ordered list that holds them.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// One entry on the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Trimmed, non-empty item text
    pub text: String,
    /// Marked by "highlight last"
    #[serde(default)]
    pub highlighted: bool,
}

impl GroceryItem {
    pub(crate) fn new(text: String) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }
}

/// Ordered list of items; insertion order is display order.
///
/// Serialized as a bare JSON array of `{text, highlighted}` objects.
/// Mutation goes through [`crate::GroceryListStore`] only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroceryList(Vec<GroceryItem>);

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// No blank text and at most one highlighted item
    pub fn validate(&self) -> bool {
        let highlighted = self.0.iter().filter(|item| item.highlighted).count();
        highlighted <= 1 && self.0.iter().all(|item| !item.text.trim().is_empty())
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<GroceryItem> {
        &mut self.0
    }
}

impl Deref for GroceryList {
    type Target = [GroceryItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a GroceryList {
    type Item = &'a GroceryItem;
    type IntoIter = std::slice::Iter<'a, GroceryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
