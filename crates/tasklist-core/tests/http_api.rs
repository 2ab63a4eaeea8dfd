//! HTTP Adapter Tests
//!
//! Runs `HttpTaskApi` against an in-process stub of the tasks resource that
//! answers the way the reference backend does (`null` for unknown ids on GET).

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tasklist_core::{ApiConfig, ApiError, HttpTaskApi, Task, TaskApi, TaskId, TaskPayload};

#[derive(Default)]
struct Inner {
    tasks: Vec<Task>,
    next_id: TaskId,
    posted: Vec<Value>,
}

#[derive(Clone, Default)]
struct Stub {
    inner: Arc<Mutex<Inner>>,
}

async fn list_tasks(State(stub): State<Stub>) -> Json<Vec<Task>> {
    Json(stub.inner.lock().unwrap().tasks.clone())
}

async fn create_task(State(stub): State<Stub>, Json(body): Json<Value>) -> Result<Json<Task>, StatusCode> {
    let payload: TaskPayload = serde_json::from_value(body.clone()).map_err(|_| StatusCode::BAD_REQUEST)?;
    let mut inner = stub.inner.lock().unwrap();
    inner.posted.push(body);
    inner.next_id += 1;
    let task = Task {
        id: inner.next_id,
        title: payload.title,
        description: payload.description,
    };
    inner.tasks.push(task.clone());
    Ok(Json(task))
}

async fn get_task(State(stub): State<Stub>, Path(id): Path<TaskId>) -> Json<Option<Task>> {
    Json(stub.inner.lock().unwrap().tasks.iter().find(|t| t.id == id).cloned())
}

async fn update_task(
    State(stub): State<Stub>,
    Path(id): Path<TaskId>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Task>, StatusCode> {
    let mut inner = stub.inner.lock().unwrap();
    let task = inner.tasks.iter_mut().find(|t| t.id == id).ok_or(StatusCode::NOT_FOUND)?;
    task.title = payload.title;
    task.description = payload.description;
    Ok(Json(task.clone()))
}

async fn delete_task(State(stub): State<Stub>, Path(id): Path<TaskId>) -> StatusCode {
    let mut inner = stub.inner.lock().unwrap();
    let before = inner.tasks.len();
    inner.tasks.retain(|t| t.id != id);
    if inner.tasks.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn garbage() -> &'static str {
    "<html>not json</html>"
}

async fn spawn_stub() -> (String, Stub) {
    let stub = Stub::default();
    let app = Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", get(get_task).put(update_task).delete(delete_task))
        .route("/broken/tasks", get(broken))
        .route("/garbage/tasks", get(garbage))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), stub)
}

fn client(base: &str, path: &str) -> HttpTaskApi {
    HttpTaskApi::new(ApiConfig::new(&format!("{}{}", base, path)).unwrap())
}

#[tokio::test]
async fn test_empty_list() {
    let (base, _stub) = spawn_stub().await;
    let api = client(&base, "/api/tasks");
    assert!(api.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_posts_exact_body_and_lists() {
    let (base, stub) = spawn_stub().await;
    let api = client(&base, "/api/tasks");

    let created = api.create(&TaskPayload::new("Buy milk", "2%  ")).await.unwrap();
    assert!(created.id > 0);

    assert_eq!(
        stub.inner.lock().unwrap().posted,
        vec![json!({"title": "Buy milk", "description": "2%  "})]
    );

    let tasks = api.list().await.unwrap();
    assert!(tasks
        .iter()
        .any(|t| t.id == created.id && t.title == "Buy milk" && t.description == "2%  "));
}

#[tokio::test]
async fn test_update_then_get() {
    let (base, _stub) = spawn_stub().await;
    let api = client(&base, "/api/tasks/");

    let created = api.create(&TaskPayload::new("Original", "old")).await.unwrap();
    let updated = api
        .update(created.id, &TaskPayload::new("Renamed", "new"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);

    let fetched = api.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, Task { id: created.id, title: "Renamed".into(), description: "new".into() });
}

#[tokio::test]
async fn test_missing_task_is_not_found() {
    let (base, _stub) = spawn_stub().await;
    let api = client(&base, "/api/tasks");

    let err = api.get_by_id(99).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { id: 99 }));

    let err = api.update(99, &TaskPayload::new("abc", "")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_then_list_and_second_delete_fails() {
    let (base, _stub) = spawn_stub().await;
    let api = client(&base, "/api/tasks");

    let keep = api.create(&TaskPayload::new("Keep", "")).await.unwrap();
    let gone = api.create(&TaskPayload::new("Gone", "")).await.unwrap();

    assert_eq!(api.delete_by_id(gone.id).await.unwrap(), None);

    let ids: Vec<_> = api.list().await.unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![keep.id]);

    let err = api.delete_by_id(gone.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
    let (base, _stub) = spawn_stub().await;
    let api = client(&base, "/broken/tasks");

    match api.list().await.unwrap_err() {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Status, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let (base, _stub) = spawn_stub().await;
    let api = client(&base, "/garbage/tasks");
    assert!(matches!(api.list().await.unwrap_err(), ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Grab a free port, then close it again
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client(&format!("http://{}", addr), "/api/tasks");
    assert!(matches!(api.list().await.unwrap_err(), ApiError::Transport(_)));
}
