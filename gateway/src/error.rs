use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Route-level failures. Every variant degrades to a JSON `{"error": ...}`
/// envelope; nothing propagates as an unhandled fault.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Backend answered with a non-success status; relayed verbatim.
    #[error("backend returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },
    /// Backend unreachable, or its reply could not be read as JSON.
    #[error("{0}")]
    Unavailable(&'static str),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GatewayError::Upstream { status, body } => (status, body),
            GatewayError::Unavailable(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
