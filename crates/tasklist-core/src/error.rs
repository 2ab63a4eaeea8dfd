//! Error Types
//!
//! Failures returned by the tasks adapter and by configuration parsing.

use thiserror::Error;

use crate::model::TaskId;

/// Errors returned by [`crate::TaskApi`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status other than 404.
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },

    /// The server has no task with this id.
    #[error("task {id} not found")]
    NotFound { id: TaskId },

    /// A 2xx response whose body is not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}
