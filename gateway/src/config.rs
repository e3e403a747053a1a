//! Gateway configuration.
//!
//! All routes resolve the backend origin through one function with a single
//! documented precedence, so no route can drift to its own fallback chain.

use std::env;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

pub struct GatewayConfig {
    pub backend_url: String,
    pub bind_addr: String,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self {
            backend_url: resolve_backend_url(),
            bind_addr: env::var("GATEWAY_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

/// Resolve the backend origin from the environment.
///
/// Precedence, highest first:
/// 1. `BACKEND_URL` — deploy-time override
/// 2. `NEXT_PUBLIC_API_BASE_URL` — shared with the browser build
/// 3. `http://localhost:8000`
pub fn resolve_backend_url() -> String {
    pick_backend_url(
        env::var("BACKEND_URL").ok(),
        env::var("NEXT_PUBLIC_API_BASE_URL").ok(),
    )
}

fn pick_backend_url(backend: Option<String>, public: Option<String>) -> String {
    let raw = backend
        .or(public)
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
    // Normalize so handlers can join paths without double slashes.
    raw.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_takes_precedence() {
        let url = pick_backend_url(
            Some("http://backend:9000".into()),
            Some("http://public:9001".into()),
        );
        assert_eq!(url, "http://backend:9000");
    }

    #[test]
    fn public_url_is_the_fallback() {
        let url = pick_backend_url(None, Some("http://public:9001/".into()));
        assert_eq!(url, "http://public:9001");
    }

    #[test]
    fn defaults_to_localhost() {
        assert_eq!(pick_backend_url(None, None), "http://localhost:8000");
    }
}
