//! Grocery Context
//!
//! The store instance plus the signals views read, provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use grocery_store::{clear_request, notice_for, GroceryList, GroceryListStore, InputError, Intent};
use leptos::prelude::*;

use crate::storage::BrowserStorage;

/// How long a notice stays up before hiding itself
const NOTICE_TIMEOUT_MS: u32 = 3_000;

type Store = GroceryListStore<BrowserStorage>;

#[derive(Clone, Copy)]
pub struct GroceryContext {
    store: StoredValue<Store>,
    /// Current list - read
    pub items: ReadSignal<GroceryList>,
    /// Current list - write
    set_items: WriteSignal<GroceryList>,
    /// Message for the last rejected action - read
    pub notice: ReadSignal<Option<&'static str>>,
    /// Message for the last rejected action - write
    set_notice: WriteSignal<Option<&'static str>>,
}

impl GroceryContext {
    pub fn new(store: Store) -> Self {
        let (items, set_items) = signal(store.items().clone());
        let (notice, set_notice) = signal(None::<&'static str>);
        Self {
            store: StoredValue::new(store),
            items,
            set_items,
            notice,
            set_notice,
        }
    }

    /// Add an item; false when the text was rejected
    pub fn add(&self, text: &str) -> bool {
        self.apply(Intent::Add, |store| store.add(text).cloned())
    }

    pub fn remove_at(&self, index: usize) {
        if let Some(list) = self.store.try_update_value(|store| store.remove_at(index).clone()) {
            self.commit("remove_at", list);
        }
    }

    pub fn remove_last(&self) {
        self.apply(Intent::RemoveLast, |store| store.remove_last().cloned());
    }

    pub fn highlight_last(&self) {
        self.apply(Intent::HighlightLast, |store| store.highlight_last().cloned());
    }

    /// Whether a clear needs confirming; an empty list gets a notice instead
    pub fn request_clear(&self) -> bool {
        match self.items.with_untracked(clear_request) {
            Ok(()) => true,
            Err(message) => {
                self.show_notice(message);
                false
            }
        }
    }

    pub fn clear(&self) {
        if let Some(list) = self.store.try_update_value(|store| store.clear().clone()) {
            self.commit("clear", list);
        }
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }

    fn apply(
        &self,
        intent: Intent,
        op: impl FnOnce(&mut Store) -> Result<GroceryList, InputError>,
    ) -> bool {
        match self.store.try_update_value(op) {
            Some(Ok(list)) => {
                self.commit(&format!("{:?}", intent), list);
                true
            }
            Some(Err(e)) => {
                match notice_for(intent, &e) {
                    Some(message) => self.show_notice(message),
                    None => log::warn!("{:?} rejected: {}", intent, e),
                }
                false
            }
            None => false,
        }
    }

    fn commit(&self, action: &str, list: GroceryList) {
        log::debug!("[STORE] {} -> {} items", action, list.len());
        self.set_items.set(list);
        self.dismiss_notice();
    }

    fn show_notice(&self, message: &'static str) {
        self.set_notice.set(Some(message));
        let set_notice = self.set_notice;
        Timeout::new(NOTICE_TIMEOUT_MS, move || {
            set_notice.try_update(|current| {
                if *current == Some(message) {
                    *current = None;
                }
            });
        })
        .forget();
    }
}

/// Get the grocery context provided by `App`
pub fn use_grocery() -> GroceryContext {
    expect_context::<GroceryContext>()
}
