//! Tasklist App
//!
//! Single page: create button or create form, the task table, and the edit
//! form below it.

use leptos::prelude::*;

use tasklist_core::{ApiConfig, Board, HttpTaskApi};

use crate::components::{ErrorBanner, FormKind, TaskFormPanel, TaskTable};
use crate::context::BoardContext;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let ctx = BoardContext::new(Board::new(HttpTaskApi::new(config)));
    provide_context(ctx);

    // Derived view flags; memos keep open forms from re-rendering on every state change
    let is_loading = Memo::new(move |_| ctx.state.with(|state| state.is_loading()));
    let is_creating = Memo::new(move |_| ctx.state.with(|state| state.is_creating()));
    let can_create = Memo::new(move |_| ctx.state.with(|state| state.can_open_create()));
    // Keyed on the id only: a refresh that renames the task must not reset the inputs
    let editing_id = Memo::new(move |_| ctx.state.with(|state| state.editing_id()));

    // Initial load on mount
    Effect::new(move |_| {
        log::info!("[APP] loading tasks");
        ctx.refresh();
    });

    view! {
        <div class="tasklist">
            <h1>"Todo List"</h1>

            <ErrorBanner />

            <Show
                when=move || is_creating.get()
                fallback=move || view! {
                    <button
                        class="create-btn"
                        disabled=move || !can_create.get()
                        on:click=move |_| ctx.open_create()
                    >
                        "Create a task"
                    </button>
                }
            >
                <TaskFormPanel kind=FormKind::Create />
            </Show>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <TaskTable />
            </Show>

            {move || editing_id
                .get()
                .and_then(|_| ctx.state.with_untracked(|state| state.editing_task().cloned()))
                .map(|task| view! { <TaskFormPanel kind=FormKind::Edit(task) /> })}
        </div>
    }
}
