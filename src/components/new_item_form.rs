//! New Item Form Component
//!
//! Text input plus Add button; Enter submits the form.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::use_grocery;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_grocery();

    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <form class="input-group" on:submit=add_item>
            <input
                type="text"
                id="itemInput"
                placeholder="Add an item..."
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" id="addBtn">"Add"</button>
        </form>
    }
}
