//! Task Form Validation
//!
//! Client-side checks run before any request is made.

use crate::model::TaskPayload;

/// Minimum title length, in characters
pub const TITLE_MIN_CHARS: usize = 3;

/// Raw form input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
}

/// Field-level validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
    }
}

impl TaskForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Turn the form into a request payload.
    ///
    /// Both fields are sent exactly as typed.
    pub fn validate(&self) -> Result<TaskPayload, FormErrors> {
        let mut errors = FormErrors::default();

        if self.title.chars().count() < TITLE_MIN_CHARS {
            errors.title = Some(format!(
                "Title must be at least {} characters",
                TITLE_MIN_CHARS
            ));
        }

        if errors.is_empty() {
            Ok(TaskPayload::new(self.title.clone(), self.description.clone()))
        } else {
            Err(errors)
        }
    }
}
