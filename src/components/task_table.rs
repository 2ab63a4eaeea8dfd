//! Task Table Component
//!
//! One row per task, in server order, with edit and delete actions.

use leptos::prelude::*;

use crate::context::use_board;

#[component]
pub fn TaskTable() -> impl IntoView {
    let ctx = use_board();
    let tasks = move || ctx.state.with(|state| state.tasks().to_vec());

    view! {
        <table class="task-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Title"</th>
                    <th>"Description"</th>
                    <th></th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=tasks
                    key=|task| (task.id, task.title.clone(), task.description.clone())
                    children=move |task| {
                        let id = task.id;
                        let is_editing = move || ctx.state.with(|state| state.editing_id() == Some(id));
                        view! {
                            <tr class=move || if is_editing() { "task-row editing" } else { "task-row" }>
                                <td>{task.id}</td>
                                <td>{task.title}</td>
                                <td class="truncate">{task.description}</td>
                                <td>
                                    <button
                                        class="delete-btn"
                                        title="Delete"
                                        on:click=move |_| ctx.delete(id)
                                    >
                                        "×"
                                    </button>
                                </td>
                                <td>
                                    <button
                                        class="edit-btn"
                                        title="Edit"
                                        on:click=move |_| ctx.open_edit(id)
                                    >
                                        "✎"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
