//! Frontend Models
//!
//! Data structures matching the backend wire format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
}

/// Partial update; unset fields are left unchanged by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_id: Option<i64>,
}

/// An action the assistant executed while answering (e.g. creating a task).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolCall {
    pub tool_name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
    #[serde(default)]
    pub result: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub conversation_id: i64,
    pub assistant_response: String,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Display-only chat entry; never persisted beyond the open page.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_parses_backend_shape() {
        let json = r#"{
            "id": 42,
            "title": "Buy milk",
            "description": null,
            "completed": false,
            "user_id": "u_1",
            "created_at": "2025-01-01T10:00:00",
            "updated_at": "2025-01-01T10:00:00"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 42);
        assert_eq!(task.title, "Buy milk");
        assert!(task.description.is_none());
        assert!(!task.completed);
    }

    #[test]
    fn token_response_tolerates_missing_token_type() {
        let token: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert!(token.token_type.is_none());
    }

    #[test]
    fn chat_response_without_tool_calls() {
        let json = r#"{"conversation_id":7,"assistant_response":"Hello"}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.conversation_id, 7);
        assert!(resp.tool_calls.is_none());
    }

    #[test]
    fn chat_response_with_tool_calls() {
        let json = r#"{
            "conversation_id": 7,
            "assistant_response": "Done",
            "tool_calls": [
                {"tool_name": "create_task", "arguments": {"title": "x"}, "result": {"id": 1}}
            ]
        }"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        let calls = resp.tool_calls.unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tool_name, "create_task");
        assert_eq!(calls[0].arguments["title"], "x");
    }

    #[test]
    fn update_task_omits_unset_fields() {
        let update = UpdateTask {
            completed: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "completed": true }));
    }
}
