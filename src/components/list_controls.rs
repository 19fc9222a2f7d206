//! List Controls Component

use leptos::prelude::*;

use super::ConfirmButton;
use crate::context::use_grocery;

/// Highlight Last / Remove Last / Clear All
#[component]
pub fn ListControls() -> impl IntoView {
    let ctx = use_grocery();

    view! {
        <div class="controls">
            <button class="control-btn" id="highlightBtn" on:click=move |_| ctx.highlight_last()>
                "Highlight Last"
            </button>
            <button class="control-btn" id="removeBtn" on:click=move |_| ctx.remove_last()>
                "Remove Last"
            </button>
            <ConfirmButton
                label="Clear All"
                prompt="Clear all items?"
                on_request=Callback::new(move |_: ()| ctx.request_clear())
                on_confirm=Callback::new(move |_: ()| ctx.clear())
            />
        </div>
    }
}
