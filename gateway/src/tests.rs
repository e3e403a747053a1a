use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use axum::{
    body::Body,
    extract::Path,
    http::{header, HeaderMap, Request, StatusCode},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use crate::{create_app, AppState};

/// Serve a mock backend on an ephemeral port, returning its origin.
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn gateway_for(backend_url: String) -> Router {
    create_app(AppState {
        client: reqwest::Client::new(),
        backend_url,
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn login_relays_backend_token() {
    let backend = Router::new().route(
        "/auth/login",
        post(|Json(creds): Json<Value>| async move {
            assert_eq!(creds["email"], "test@example.com");
            Json(json!({ "access_token": "tok-1", "token_type": "bearer" }))
        }),
    );
    let app = gateway_for(spawn_backend(backend).await);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": "test@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["access_token"], "tok-1");
}

#[tokio::test]
async fn login_failure_is_wrapped_in_error_envelope() {
    let backend = Router::new().route(
        "/auth/login",
        post(|| async { (StatusCode::UNAUTHORIZED, "Incorrect email or password") }),
    );
    let app = gateway_for(spawn_backend(backend).await);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": "test@example.com", "password": "wrong" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Incorrect email or password");
}

#[tokio::test]
async fn create_task_relays_backend_status_and_body() {
    let backend = Router::new().route(
        "/tasks/",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["title"], "Buy milk");
            (
                StatusCode::CREATED,
                Json(json!({
                    "id": 1,
                    "title": "Buy milk",
                    "description": null,
                    "completed": false,
                    "user_id": "u1"
                })),
            )
        }),
    );
    let app = gateway_for(spawn_backend(backend).await);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/tasks")
                .header("content-type", "application/json")
                .header(header::AUTHORIZATION, "Bearer valid-token")
                .body(Body::from(json!({ "title": "Buy milk" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Buy milk");
}

#[tokio::test]
async fn bearer_token_is_forwarded_or_omitted() {
    // The mock echoes whatever Authorization header it received.
    let backend = Router::new().route(
        "/tasks/",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get(header::AUTHORIZATION)
                .map(|v| v.to_str().unwrap().to_string());
            Json(json!({ "auth": auth }))
        }),
    );
    let app = gateway_for(spawn_backend(backend).await);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/tasks")
                .header(header::AUTHORIZATION, "Bearer secret-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_json(response).await["auth"], "Bearer secret-token");

    let response = app
        .oneshot(Request::builder().uri("/api/tasks").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(body_json(response).await["auth"].is_null());
}

#[tokio::test]
async fn unauthenticated_get_task_relays_backend_401() {
    let backend = Router::new().route(
        "/tasks/{id}",
        get(|headers: HeaderMap| async move {
            assert!(headers.get(header::AUTHORIZATION).is_none());
            (StatusCode::UNAUTHORIZED, "Not authenticated")
        }),
    );
    let app = gateway_for(spawn_backend(backend).await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/tasks/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not authenticated");
}

#[tokio::test]
async fn patch_targets_toggle_complete_and_a_pair_restores_state() {
    // The backend serves toggle only at /tasks/{id}/toggle-complete; both
    // gateway spellings must land there.
    let completed = Arc::new(AtomicBool::new(false));
    let backend = Router::new().route(
        "/tasks/{id}/toggle-complete",
        patch(move |Path(id): Path<i64>| {
            let completed = completed.clone();
            async move {
                let now = !completed.fetch_xor(true, Ordering::SeqCst);
                Json(json!({ "id": id, "completed": now }))
            }
        }),
    );
    let app = gateway_for(spawn_backend(backend).await);

    let first = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/tasks/7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let first = body_json(first).await;
    assert_eq!(first["id"], 7);
    assert_eq!(first["completed"], true);

    let second = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/tasks/7/toggle-complete")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_json(second).await["completed"], false);
}

#[tokio::test]
async fn delete_relays_status_with_empty_body() {
    let backend = Router::new().route(
        "/tasks/{id}",
        delete(|| async { StatusCode::NO_CONTENT }),
    );
    let app = gateway_for(spawn_backend(backend).await);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/tasks/3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn chat_forwards_to_trailing_slash_endpoint() {
    let backend = Router::new().route(
        "/chat/",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["message"], "add a task");
            Json(json!({
                "conversation_id": 11,
                "assistant_response": "Done.",
                "tool_calls": [
                    { "tool_name": "create_task", "arguments": {}, "result": { "id": 5 } }
                ]
            }))
        }),
    );
    let app = gateway_for(spawn_backend(backend).await);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/chat",
            json!({ "message": "add a task", "conversation_id": null }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["conversation_id"], 11);
    assert_eq!(body["tool_calls"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unreachable_backend_degrades_to_fixed_500() {
    // Bind then drop so the port is very likely to refuse connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = gateway_for(format!("http://{addr}"));
    let response = app
        .oneshot(Request::builder().uri("/api/tasks").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to fetch tasks");
}
