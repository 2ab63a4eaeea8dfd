//! View State
//!
//! Everything the task list page renders from, plus the transitions user
//! actions and fetch results apply to it.

use crate::model::{Task, TaskId};

/// Which panel is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiMode {
    #[default]
    Idle,
    Creating,
    Editing(TaskId),
}

/// Tag of one list fetch. Only the latest one may write the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    tasks: Vec<Task>,
    loading: bool,
    mode: UiMode,
    error: Option<String>,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_creating(&self) -> bool {
        self.mode == UiMode::Creating
    }

    pub fn editing_id(&self) -> Option<TaskId> {
        match self.mode {
            UiMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    /// Task currently open in the edit panel
    pub fn editing_task(&self) -> Option<&Task> {
        let id = self.editing_id()?;
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Create is offered only while nothing is being edited
    pub fn can_open_create(&self) -> bool {
        !matches!(self.mode, UiMode::Editing(_))
    }

    // ========================
    // Fetch lifecycle
    // ========================

    /// Start a list fetch and hand out its generation
    pub fn begin_load(&mut self) -> Generation {
        self.generation += 1;
        self.loading = true;
        Generation(self.generation)
    }

    /// Apply a list result. Returns false when a newer fetch has started
    /// since, in which case the result is dropped.
    pub fn finish_load(&mut self, generation: Generation, result: Result<Vec<Task>, String>) -> bool {
        if generation.0 != self.generation {
            log::debug!(
                "[BOARD] dropping stale list result (generation {} < {})",
                generation.0,
                self.generation
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                if let UiMode::Editing(id) = self.mode {
                    if !self.tasks.iter().any(|task| task.id == id) {
                        self.mode = UiMode::Idle;
                    }
                }
            }
            Err(message) => self.push_error(message),
        }
        true
    }

    // ========================
    // User-driven transitions
    // ========================

    /// Open the create panel. Refused while editing.
    pub fn open_create(&mut self) -> bool {
        if !self.can_open_create() {
            return false;
        }
        self.mode = UiMode::Creating;
        true
    }

    /// Open the edit panel for a listed task, closing the create panel.
    pub fn open_edit(&mut self, id: TaskId) -> bool {
        if !self.tasks.iter().any(|task| task.id == id) {
            return false;
        }
        self.mode = UiMode::Editing(id);
        true
    }

    /// Close whichever panel is open
    pub fn close_panel(&mut self) {
        self.mode = UiMode::Idle;
    }

    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.push_error(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Add a message to the banner. Earlier undismissed messages stay
    /// in front; a message already shown is not repeated.
    fn push_error(&mut self, message: String) {
        self.error = Some(match self.error.take() {
            Some(shown) if shown.split("; ").any(|part| part == message) => shown,
            Some(shown) => format!("{}; {}", shown, message),
            None => message,
        });
    }
}
