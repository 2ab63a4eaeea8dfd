//! Board Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use tasklist_core::{Board, HttpTaskApi, StateCell, Submission, TaskForm, TaskId, ViewState};

/// View state held in a signal
#[derive(Clone, Copy)]
struct SignalCell(RwSignal<ViewState>);

impl StateCell for SignalCell {
    fn apply<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Page-wide state and the flows that change it
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Everything the page renders from
    pub state: RwSignal<ViewState>,
    board: StoredValue<Board<HttpTaskApi>, LocalStorage>,
}

impl BoardContext {
    pub fn new(board: Board<HttpTaskApi>) -> Self {
        Self {
            state: RwSignal::new(ViewState::new()),
            board: StoredValue::new_local(board),
        }
    }

    fn run<F, Fut>(&self, flow: F)
    where
        F: FnOnce(Board<HttpTaskApi>, SignalCell) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        let Some(board) = self.board.try_with_value(Board::clone) else {
            log::warn!("[APP] board disposed, dropping action");
            return;
        };
        spawn_local(flow(board, SignalCell(self.state)));
    }

    /// Re-fetch the full task list
    pub fn refresh(&self) {
        self.run(|board, cell| async move { board.refresh(&cell).await });
    }

    pub fn submit_create(&self, form: TaskForm, on_done: impl FnOnce(Submission) + 'static) {
        self.run(|board, cell| async move { on_done(board.submit_create(&cell, &form).await) });
    }

    pub fn submit_edit(&self, form: TaskForm, on_done: impl FnOnce(Submission) + 'static) {
        self.run(|board, cell| async move { on_done(board.submit_edit(&cell, &form).await) });
    }

    pub fn delete(&self, id: TaskId) {
        self.run(move |board, cell| async move {
            board.delete(&cell, id).await;
        });
    }

    pub fn open_create(&self) {
        self.state.update(|state| {
            state.open_create();
        });
    }

    pub fn open_edit(&self, id: TaskId) {
        self.state.update(|state| {
            state.open_edit(id);
        });
    }

    pub fn close_panel(&self) {
        self.state.update(ViewState::close_panel);
    }

    pub fn dismiss_error(&self) {
        self.state.update(ViewState::dismiss_error);
    }
}

pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
