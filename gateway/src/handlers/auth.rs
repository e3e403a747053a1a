use axum::{extract::State, response::Response, Json};
use serde::{Deserialize, Serialize};

use crate::{error::GatewayError, proxy, AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<Response, GatewayError> {
    let req = state
        .client
        .post(format!("{}/auth/login", state.backend_url))
        .json(&creds);
    proxy::send(req, None, "Login failed").await
}

pub async fn register(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<Response, GatewayError> {
    let req = state
        .client
        .post(format!("{}/auth/register", state.backend_url))
        .json(&creds);
    proxy::send(req, None, "Registration failed").await
}
