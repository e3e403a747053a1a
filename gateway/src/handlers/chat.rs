use axum::{extract::State, http::HeaderMap, response::Response, Json};
use serde_json::Value;

use crate::{error::GatewayError, proxy, AppState};

/// Forward a chat turn to the backend assistant. The body carries the user
/// message and, after the first turn, the conversation id.
pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Response, GatewayError> {
    let req = state
        .client
        .post(format!("{}/chat/", state.backend_url))
        .json(&body);
    proxy::send(req, proxy::bearer_token(&headers), "Chat request failed").await
}
