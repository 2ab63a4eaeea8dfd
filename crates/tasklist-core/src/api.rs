//! Tasks Resource Adapter
//!
//! One HTTP call per operation. Failures are logged and handed back untouched;
//! there are no retries.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::model::{Task, TaskId, TaskPayload};

/// Operations on the tasks resource
///
/// Futures are not `Send`: in the browser they run on the page's event loop.
#[async_trait(?Send)]
pub trait TaskApi {
    /// All tasks, in server order
    async fn list(&self) -> ApiResult<Vec<Task>>;

    /// One task; `NotFound` when the server has none
    async fn get_by_id(&self, id: TaskId) -> ApiResult<Task>;

    /// Create a task and return the persisted record
    async fn create(&self, payload: &TaskPayload) -> ApiResult<Task>;

    /// Replace title and description of an existing task
    async fn update(&self, id: TaskId, payload: &TaskPayload) -> ApiResult<Task>;

    /// Delete a task; returns whatever body the server sent, if any
    async fn delete_by_id(&self, id: TaskId) -> ApiResult<Option<Value>>;
}

/// `TaskApi` over HTTP with reqwest
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTaskApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn send(&self, request: RequestBuilder, id: Option<TaskId>) -> ApiResult<Response> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(ApiError::NotFound { id });
            }
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn fetch_list(&self) -> ApiResult<Vec<Task>> {
        let url = self.config.collection_url();
        log::debug!("[TASKS] GET {}", url);
        let response = self.send(self.client.get(&url), None).await?;
        Self::decode(response).await
    }

    async fn fetch_one(&self, id: TaskId) -> ApiResult<Task> {
        let url = self.config.item_url(id);
        log::debug!("[TASKS] GET {}", url);
        let response = self.send(self.client.get(&url), Some(id)).await?;
        let bytes = response.bytes().await?;
        // The reference backend answers 200 with `null` for unknown ids
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ApiError::NotFound { id });
        }
        let task: Option<Task> = serde_json::from_slice(&bytes)?;
        task.ok_or(ApiError::NotFound { id })
    }

    async fn post(&self, payload: &TaskPayload) -> ApiResult<Task> {
        let url = self.config.collection_url();
        log::debug!("[TASKS] POST {}", url);
        let response = self.send(self.client.post(&url).json(payload), None).await?;
        Self::decode(response).await
    }

    async fn put(&self, id: TaskId, payload: &TaskPayload) -> ApiResult<Task> {
        let url = self.config.item_url(id);
        log::debug!("[TASKS] PUT {}", url);
        let response = self.send(self.client.put(&url).json(payload), Some(id)).await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: TaskId) -> ApiResult<Option<Value>> {
        let url = self.config.item_url(id);
        log::debug!("[TASKS] DELETE {}", url);
        let response = self.send(self.client.delete(&url), Some(id)).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text).unwrap_or(Value::String(text))))
    }
}

/// Log a failed operation and pass the result through
fn logged<T>(operation: &str, result: ApiResult<T>) -> ApiResult<T> {
    if let Err(err) = &result {
        log::error!("[TASKS] {} failed: {}", operation, err);
    }
    result
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> ApiResult<Vec<Task>> {
        logged("list", self.fetch_list().await)
    }

    async fn get_by_id(&self, id: TaskId) -> ApiResult<Task> {
        logged("get_by_id", self.fetch_one(id).await)
    }

    async fn create(&self, payload: &TaskPayload) -> ApiResult<Task> {
        logged("create", self.post(payload).await)
    }

    async fn update(&self, id: TaskId, payload: &TaskPayload) -> ApiResult<Task> {
        logged("update", self.put(id, payload).await)
    }

    async fn delete_by_id(&self, id: TaskId) -> ApiResult<Option<Value>> {
        logged("delete_by_id", self.delete(id).await)
    }
}
