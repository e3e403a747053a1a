//! Todo Frontend App
//!
//! Top-level component: provides the session, API client, and task store,
//! and switches between the login page and the task list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{LoginPage, TasksPage};
use crate::session::Session;
use crate::store::TaskState;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::restore();
    let api = ApiClient::new(session);

    // Provide context to all children
    provide_context(session);
    provide_context(api);
    provide_context(Store::new(TaskState::default()));

    // No session means no data requests: fall back to the login view.
    view! {
        <Show when=move || session.is_authenticated() fallback=|| view! { <LoginPage /> }>
            <TasksPage />
        </Show>
    }
}
