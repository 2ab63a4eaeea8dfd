//! Task Board Flows
//!
//! User actions that talk to the server. Every mutation is followed by a full
//! re-fetch of the task list; nothing is patched locally.

use std::cell::RefCell;

use crate::api::TaskApi;
use crate::model::{Task, TaskId};
use crate::state::ViewState;
use crate::validation::{FormErrors, TaskForm};

/// Somewhere a [`ViewState`] lives
pub trait StateCell {
    /// Run `f` against the state. `None` once the owning view is gone.
    fn apply<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R>;
}

impl StateCell for RefCell<ViewState> {
    fn apply<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Outcome of submitting the create or edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Rejected client-side; nothing was sent
    Invalid(FormErrors),
    /// The server accepted the change
    Saved(Task),
    /// The request failed; the error is on the view state
    Failed,
    /// No edit target was selected
    Ignored,
}

/// Drives a [`ViewState`] through a [`TaskApi`]
#[derive(Debug, Clone)]
pub struct Board<A> {
    api: A,
}

impl<A: TaskApi> Board<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Replace the task list with a fresh server snapshot
    pub async fn refresh<S: StateCell>(&self, cell: &S) {
        let Some(generation) = cell.apply(ViewState::begin_load) else {
            return;
        };
        let result = self
            .api
            .list()
            .await
            .map_err(|e| format!("Could not load tasks: {}", e));
        if let Ok(tasks) = &result {
            log::debug!("[BOARD] loaded {} tasks", tasks.len());
        }
        cell.apply(|state| state.finish_load(generation, result));
    }

    pub async fn submit_create<S: StateCell>(&self, cell: &S, form: &TaskForm) -> Submission {
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(errors) => return Submission::Invalid(errors),
        };

        let outcome = match self.api.create(&payload).await {
            Ok(task) => {
                log::info!("[BOARD] created task {}", task.id);
                Submission::Saved(task)
            }
            Err(e) => {
                cell.apply(|state| state.record_failure(format!("Could not create task: {}", e)));
                Submission::Failed
            }
        };

        self.refresh(cell).await;

        if matches!(outcome, Submission::Saved(_)) {
            cell.apply(|state| {
                if state.is_creating() {
                    state.close_panel();
                }
            });
        }
        outcome
    }

    pub async fn submit_edit<S: StateCell>(&self, cell: &S, form: &TaskForm) -> Submission {
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(errors) => return Submission::Invalid(errors),
        };
        let Some(id) = cell.apply(|state| state.editing_id()).flatten() else {
            return Submission::Ignored;
        };

        let outcome = match self.api.update(id, &payload).await {
            Ok(task) => {
                log::info!("[BOARD] updated task {}", task.id);
                Submission::Saved(task)
            }
            Err(e) => {
                cell.apply(|state| state.record_failure(format!("Could not update task {}: {}", id, e)));
                Submission::Failed
            }
        };

        self.refresh(cell).await;

        if matches!(outcome, Submission::Saved(_)) {
            cell.apply(|state| {
                if state.editing_id() == Some(id) {
                    state.close_panel();
                }
            });
        }
        outcome
    }

    /// Delete without confirmation. The list is re-fetched whether or not the
    /// delete went through.
    pub async fn delete<S: StateCell>(&self, cell: &S, id: TaskId) -> bool {
        let deleted = match self.api.delete_by_id(id).await {
            Ok(_) => {
                log::info!("[BOARD] deleted task {}", id);
                true
            }
            Err(e) => {
                cell.apply(|state| state.record_failure(format!("Could not delete task {}: {}", id, e)));
                false
            }
        };
        self.refresh(cell).await;
        deleted
    }
}
