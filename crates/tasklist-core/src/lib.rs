//! Tasklist Core
//!
//! Everything the task list front end needs that does not touch the DOM:
//! - model: the Task entity and the create/update payload
//! - api: the tasks resource adapter (trait + reqwest implementation)
//! - state: the view state machine
//! - board: the refresh-after-mutation flows driving the state

mod api;
mod board;
mod config;
mod error;
mod model;
mod state;
mod validation;

pub use api::{HttpTaskApi, TaskApi};
pub use board::{Board, StateCell, Submission};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult, ConfigError};
pub use model::{Task, TaskId, TaskPayload};
pub use state::{Generation, UiMode, ViewState};
pub use validation::{FormErrors, TaskForm, TITLE_MIN_CHARS};
