//! Task routes: stateless pass-throughs to the backend task API.
//!
//! The collection lives at `{backend}/tasks/` (trailing slash), items at
//! `{backend}/tasks/{id}`; PATCH maps to the backend's toggle endpoint.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
    Json,
};
use serde_json::Value;

use crate::{error::GatewayError, proxy, AppState};

pub async fn list_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let req = state.client.get(format!("{}/tasks/", state.backend_url));
    proxy::send(req, proxy::bearer_token(&headers), "Failed to fetch tasks").await
}

pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Response, GatewayError> {
    let req = state
        .client
        .post(format!("{}/tasks/", state.backend_url))
        .json(&body);
    proxy::send(req, proxy::bearer_token(&headers), "Failed to create task").await
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let req = state
        .client
        .get(format!("{}/tasks/{}", state.backend_url, id));
    proxy::send(req, proxy::bearer_token(&headers), "Failed to fetch task").await
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Response, GatewayError> {
    let req = state
        .client
        .put(format!("{}/tasks/{}", state.backend_url, id))
        .json(&body);
    proxy::send(req, proxy::bearer_token(&headers), "Failed to update task").await
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let req = state
        .client
        .delete(format!("{}/tasks/{}", state.backend_url, id));
    proxy::send(req, proxy::bearer_token(&headers), "Failed to delete task").await
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let req = state
        .client
        .patch(format!("{}/tasks/{}/toggle-complete", state.backend_url, id));
    proxy::send(
        req,
        proxy::bearer_token(&headers),
        "Failed to toggle task completion",
    )
    .await
}
