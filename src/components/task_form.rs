//! Task Form Component
//!
//! Inline title/description inputs shared by the create and edit panels.

use leptos::prelude::*;

use tasklist_core::{Submission, Task, TaskForm};

use crate::context::use_board;

/// Which flow the form submits to
#[derive(Clone, Debug, PartialEq)]
pub enum FormKind {
    Create,
    /// Prefilled with the task being edited
    Edit(Task),
}

/// Inline create/edit form
#[component]
pub fn TaskFormPanel(kind: FormKind) -> impl IntoView {
    let ctx = use_board();

    let (initial_title, initial_description) = match &kind {
        FormKind::Create => (String::new(), String::new()),
        FormKind::Edit(task) => (task.title.clone(), task.description.clone()),
    };
    let (title, set_title) = signal(initial_title);
    let (description, set_description) = signal(initial_description);
    let (title_error, set_title_error) = signal::<Option<String>>(None);

    let is_edit = matches!(kind, FormKind::Edit(_));
    let (title_placeholder, description_placeholder, submit_label) = if is_edit {
        ("Change the task title", "Change the task description", "Save")
    } else {
        ("Task title", "Task description", "Create")
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = TaskForm::new(title.get_untracked(), description.get_untracked());

        // Invalid forms never leave the page
        if let Err(errors) = form.validate() {
            set_title_error.set(errors.title);
            return;
        }
        set_title_error.set(None);

        let on_done = move |outcome: Submission| match outcome {
            Submission::Invalid(errors) => {
                let _ = set_title_error.try_set(errors.title);
            }
            Submission::Saved(_) => {
                let _ = set_title.try_set(String::new());
                let _ = set_description.try_set(String::new());
            }
            Submission::Failed | Submission::Ignored => {}
        };

        if is_edit {
            ctx.submit_edit(form, on_done);
        } else {
            ctx.submit_create(form, on_done);
        }
    };

    view! {
        <form class="task-form" on:submit=submit>
            <div class="task-form-fields">
                <input
                    type="text"
                    class="task-title-input"
                    placeholder=title_placeholder
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                {move || title_error.get().map(|message| view! {
                    <span class="field-error">{message}</span>
                })}
                <input
                    type="text"
                    class="task-description-input"
                    placeholder=description_placeholder
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </div>

            <div class="task-form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| ctx.close_panel()>
                    "Cancel"
                </button>
                <button type="submit" class="submit-btn">{submit_label}</button>
            </div>
        </form>
    }
}
