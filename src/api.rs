//! Client API Wrapper
//!
//! Typed async wrappers around the HTTP surface the views call. This is the
//! single seam where an unauthorized response is detected: a 401 clears the
//! stored token before the error reaches the caller.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{
    ChatRequest, ChatResponse, CreateTask, Credentials, Task, TokenResponse, UpdateTask,
};
use crate::session::Session;

/// Request origin, fixed at build time. Defaults to the gateway; set
/// `API_BASE_URL` at compile time to talk to the backend directly.
const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Session missing or rejected; the stored token has been cleared.
    #[error("unauthorized")]
    Unauthorized,
    #[error("request failed: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: API_BASE_URL.to_string(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the stored token when present, then apply the shared response
    /// policy. A 401 additionally invalidates the session before the error
    /// reaches the caller.
    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let req = match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let result = decode_response(status, &bytes);
        if matches!(result, Err(ApiError::Unauthorized)) {
            self.session.invalidate();
        }
        result
    }

    // ========================
    // Authentication
    // ========================

    /// Log in and begin a session with the returned token.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let creds = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token: TokenResponse = self
            .send(self.client.post(self.url("/auth/login")).json(&creds))
            .await?;
        self.session.begin(token.access_token.clone());
        Ok(token)
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<serde_json::Value, ApiError> {
        let creds = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send(self.client.post(self.url("/auth/register")).json(&creds))
            .await
    }

    // ========================
    // Tasks
    // ========================

    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.send(self.client.get(self.url("/tasks"))).await
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, ApiError> {
        self.send(self.client.get(self.url(&format!("/tasks/{id}"))))
            .await
    }

    pub async fn create_task(&self, task: &CreateTask) -> Result<Task, ApiError> {
        self.send(self.client.post(self.url("/tasks")).json(task))
            .await
    }

    pub async fn update_task(&self, id: i64, update: &UpdateTask) -> Result<Task, ApiError> {
        self.send(
            self.client
                .put(self.url(&format!("/tasks/{id}")))
                .json(update),
        )
        .await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        self.send(self.client.delete(self.url(&format!("/tasks/{id}"))))
            .await
    }

    pub async fn toggle_task(&self, id: i64) -> Result<Task, ApiError> {
        // The backend serves toggle only at this path; the gateway mirrors
        // it, so the same request works in both configurations.
        self.send(
            self.client
                .patch(self.url(&format!("/tasks/{id}/toggle-complete"))),
        )
        .await
    }

    // ========================
    // Chat
    // ========================

    pub async fn chat(
        &self,
        message: &str,
        conversation_id: Option<i64>,
    ) -> Result<ChatResponse, ApiError> {
        let body = ChatRequest {
            message: message.to_string(),
            conversation_id,
        };
        self.send(self.client.post(self.url("/chat")).json(&body))
            .await
    }
}

/// Response policy shared by every wrapper: 401 maps to `Unauthorized`,
/// other non-success statuses carry status and body text, and an empty
/// success body decodes as `()`.
fn decode_response<T: DeserializeOwned>(
    status: reqwest::StatusCode,
    body: &[u8],
) -> Result<T, ApiError> {
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }
    if body.is_empty() {
        // No content, e.g. a delete; `()` deserializes from null.
        return serde_json::from_slice(b"null").map_err(|e| ApiError::Network(e.to_string()));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn default_base_url_is_the_gateway() {
        assert_eq!(API_BASE_URL, "/api");
    }

    #[test]
    fn unauthorized_is_distinguished_from_other_failures() {
        let generic = ApiError::Status {
            status: 422,
            body: "validation".into(),
        };
        assert_ne!(generic, ApiError::Unauthorized);
        assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized");
    }

    #[test]
    fn a_401_maps_to_unauthorized_regardless_of_body() {
        let result: Result<Task, ApiError> =
            decode_response(StatusCode::UNAUTHORIZED, br#"{"error":"expired"}"#);
        assert_eq!(result, Err(ApiError::Unauthorized));

        let bare: Result<(), ApiError> = decode_response(StatusCode::UNAUTHORIZED, b"");
        assert_eq!(bare, Err(ApiError::Unauthorized));
    }

    #[test]
    fn other_failures_carry_status_and_body() {
        let result: Result<Task, ApiError> =
            decode_response(StatusCode::UNPROCESSABLE_ENTITY, b"title required");
        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 422,
                body: "title required".into(),
            })
        );
    }

    #[test]
    fn empty_success_body_decodes_as_unit() {
        let result: Result<(), ApiError> = decode_response(StatusCode::NO_CONTENT, b"");
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn success_body_decodes_as_the_wire_type() {
        let body = br#"{
            "id": 3,
            "title": "Water plants",
            "description": null,
            "completed": false,
            "user_id": "u-1",
            "created_at": "2025-06-01T09:00:00Z",
            "updated_at": "2025-06-01T09:00:00Z"
        }"#;
        let task: Task = decode_response(StatusCode::OK, body).unwrap();
        assert_eq!(task.id, 3);
        assert!(!task.completed);
    }
}
