//! Error Banner Component
//!
//! Shows the last failed request until dismissed.

use leptos::prelude::*;

use crate::context::use_board;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_board();
    let error = Memo::new(move |_| ctx.state.with(|state| state.error().map(str::to_string)));

    move || {
        error.get().map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-text">{message}</span>
                    <button class="close-btn" on:click=move |_| ctx.dismiss_error()>"×"</button>
                </div>
            }
        })
    }
}
