//! Confirm Button Component
//!
//! Inline confirmation with confirm/cancel actions.

use leptos::prelude::*;

/// Button that asks before running its action
///
/// # Arguments
/// * `label` - Text of the initial button
/// * `prompt` - Question shown while confirming
/// * `on_request` - Runs on the first click; returning false skips confirmation
/// * `on_confirm` - Runs when the user confirms
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] on_request: Callback<(), bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="control-btn"
                on:click=move |_| {
                    if on_request.run(()) {
                        set_confirming.set(true);
                    }
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="inline-confirm">
                <span class="inline-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        on_confirm.run(());
                        set_confirming.set(false);
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
