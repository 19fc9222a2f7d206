//! Grocery List Frontend App
//!
//! Opens the store once, provides it through context and lays out the page.

use grocery_store::{GroceryListStore, StoreConfig};
use leptos::prelude::*;

use crate::components::{GroceryListView, ListControls, NewItemForm, NoticeBanner};
use crate::context::GroceryContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    let config = StoreConfig::default();
    let store = GroceryListStore::with_config(BrowserStorage, &config);
    log::info!(
        "[APP] Loaded {} items from '{}'", store.items().len(), store.storage_key()
    );

    let ctx = GroceryContext::new(store);
    provide_context(ctx);

    view! {
        <div class="container">
            <h1>"Grocery List"</h1>

            <NewItemForm />

            <ListControls />

            <NoticeBanner />

            <GroceryListView />

            <p class="item-count">{move || format!("{} items", ctx.items.with(|list| list.len()))}</p>
        </div>
    }
}
