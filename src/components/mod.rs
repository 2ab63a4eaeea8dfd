//! UI Components
//!
//! Leptos components making up the task list page.

mod error_banner;
mod task_form;
mod task_table;

pub use error_banner::ErrorBanner;
pub use task_form::{FormKind, TaskFormPanel};
pub use task_table::TaskTable;
