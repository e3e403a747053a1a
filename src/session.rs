//! Session Context
//!
//! Owner of the bearer-token session. One local-storage slot is mirrored
//! into a signal so views can react to login, logout, and invalidation.

use leptos::prelude::*;

const TOKEN_KEY: &str = "authToken";

/// Session state provided via context.
///
/// Invariant: when no token is held, data views are never rendered; the app
/// falls back to the login view instead.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// Restore the session from local storage on boot.
    pub fn restore() -> Self {
        Self {
            token: RwSignal::new(read_stored_token()),
        }
    }

    /// Current token, untracked (for request building inside async tasks).
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Reactive view of whether a session exists.
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Begin a session with a fresh token from login.
    pub fn begin(&self, token: String) {
        write_stored_token(Some(&token));
        self.token.set(Some(token));
    }

    /// End the session at the user's request.
    pub fn end(&self) {
        write_stored_token(None);
        self.token.set(None);
    }

    /// Drop a session the backend rejected with 401.
    pub fn invalidate(&self) {
        write_stored_token(None);
        self.token.set(None);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_stored_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

fn write_stored_token(token: Option<&str>) {
    let Some(storage) = local_storage() else {
        return;
    };
    let result = match token {
        Some(token) => storage.set_item(TOKEN_KEY, token),
        None => storage.remove_item(TOKEN_KEY),
    };
    if result.is_err() {
        web_sys::console::warn_1(&"failed to update stored token".into());
    }
}
