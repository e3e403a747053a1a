//! Forwarding helpers shared by every route.
//!
//! A route builds a `reqwest` request for its backend target and hands it to
//! [`send`]; everything about token forwarding and response relaying lives
//! here so all routes behave identically.

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::error::GatewayError;

/// Extract the bearer token from an `Authorization` header.
///
/// Forwarding is best-effort: a missing or malformed header yields `None`
/// and the outbound request carries no `Authorization` header at all. The
/// gateway never fabricates or rejects authorization locally.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Send a backend request and relay its response.
///
/// `failure` is the fixed message reported (with status 500) when the
/// backend is unreachable or its reply cannot be read.
pub async fn send(
    req: reqwest::RequestBuilder,
    token: Option<&str>,
    failure: &'static str,
) -> Result<Response, GatewayError> {
    let req = match token {
        Some(token) => req.bearer_auth(token),
        None => req,
    };

    let resp = req.send().await.map_err(|e| {
        tracing::error!("backend request failed: {e}");
        GatewayError::Unavailable(failure)
    })?;

    relay(resp, failure).await
}

/// Relay the backend response: its status paired with the parsed JSON body
/// on success, or its raw text body in an error envelope on non-success.
async fn relay(resp: reqwest::Response, failure: &'static str) -> Result<Response, GatewayError> {
    let status = resp.status();

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(GatewayError::Upstream { status, body });
    }

    if status == StatusCode::NO_CONTENT || resp.content_length() == Some(0) {
        return Ok(status.into_response());
    }

    let body: Value = resp.json().await.map_err(|e| {
        tracing::error!("unreadable backend response: {e}");
        GatewayError::Unavailable(failure)
    })?;

    Ok((status, Json(body)).into_response())
}
