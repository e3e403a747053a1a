use axum::{
    routing::{get, patch, post},
    Router,
};
use dotenvy::dotenv;
use std::env;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod proxy;

#[cfg(test)]
mod tests;

/// Shared per-route state: one HTTP client, one backend origin.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub backend_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info,todo_gateway=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::GatewayConfig::from_env();
    tracing::info!(backend = %config.backend_url, "forwarding to backend");

    let state = AppState {
        client: reqwest::Client::new(),
        backend_url: config.backend_url,
    };
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/chat", post(handlers::chat::chat))
        .route(
            "/api/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/api/tasks/{id}",
            get(handlers::tasks::get_task)
                .put(handlers::tasks::update_task)
                .delete(handlers::tasks::delete_task)
                .patch(handlers::tasks::toggle_task),
        )
        // Same path shape the backend serves, so clients that skip the
        // gateway need no special casing.
        .route(
            "/api/tasks/{id}/toggle-complete",
            patch(handlers::tasks::toggle_task),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
