//! Grocery Row Component

use grocery_store::ItemRow;
use leptos::prelude::*;

use crate::context::use_grocery;

/// A single item row with its delete button
#[component]
pub fn GroceryRow(row: ItemRow) -> impl IntoView {
    let ctx = use_grocery();

    let class = row.class();
    let index = row.index;
    let text = row.text;

    view! {
        <li class=class>
            <span class="item-text">{text}</span>
            <button class="delete-btn" title="Delete" on:click=move |_| ctx.remove_at(index)>
                "×"
            </button>
        </li>
    }
}
