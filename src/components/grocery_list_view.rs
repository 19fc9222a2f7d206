//! Grocery List View Component
//!
//! Redraws every row from the current list; shows a placeholder when empty.

use grocery_store::{render_rows, EmptyState};
use leptos::prelude::*;

use super::GroceryRow;
use crate::context::use_grocery;

#[component]
pub fn GroceryListView() -> impl IntoView {
    let ctx = use_grocery();

    let is_empty = move || ctx.items.with(|list| list.is_empty());
    let rows = move || ctx.items.with(|list| render_rows(list));

    view! {
        <ul id="groceryList">
            <Show when=move || !is_empty() fallback=|| view! { <EmptyPlaceholder /> }>
                <For
                    each=rows
                    key=|row| (row.index, row.text.clone(), row.highlighted)
                    children=move |row| view! { <GroceryRow row=row /> }
                />
            </Show>
        </ul>
    }
}

#[component]
fn EmptyPlaceholder() -> impl IntoView {
    view! {
        <li class="empty-state">
            <p>{EmptyState::TITLE}</p>
            <p>{EmptyState::HINT}</p>
        </li>
    }
}
