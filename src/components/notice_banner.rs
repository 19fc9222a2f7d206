//! Notice Banner Component
//!
//! Shows why the last action was rejected. Hides itself after a timeout.

use leptos::prelude::*;

use crate::context::use_grocery;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_grocery();

    move || {
        ctx.notice.get().map(|message| {
            view! {
                <div class="notice" role="alert">
                    <span class="notice-text">{message}</span>
                    <button class="notice-close" on:click=move |_| ctx.dismiss_notice()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
