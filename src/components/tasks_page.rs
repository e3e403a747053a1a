//! Tasks Page Component
//!
//! Orchestrates the task list: fetch on mount, mutations applied to the
//! store from server responses, logout. Unauthorized responses need no
//! handling here; the wrapper clears the session and the app falls back to
//! the login view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError};
use crate::components::{ChatInterface, TaskForm, TaskItem};
use crate::models::{CreateTask, UpdateTask};
use crate::session::Session;
use crate::store::{
    store_add_task, store_remove_task, store_replace_tasks, store_update_task, use_task_store,
    TaskStateStoreFields,
};

#[component]
pub fn TasksPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<Session>();
    let store = use_task_store();

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    // Load tasks on mount. The session exists or this view would not render.
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.list_tasks().await {
                    Ok(tasks) => store_replace_tasks(&store, tasks),
                    Err(ApiError::Unauthorized) => {}
                    Err(e) => set_error.set(Some(format!("Failed to load tasks: {e}"))),
                }
                set_loading.set(false);
            });
        }
    });

    let add_task = {
        let api = api.clone();
        Callback::new(move |new_task: CreateTask| {
            let api = api.clone();
            spawn_local(async move {
                match api.create_task(&new_task).await {
                    Ok(task) => store_add_task(&store, task),
                    Err(ApiError::Unauthorized) => {}
                    Err(e) => set_error.set(Some(format!("Failed to add task: {e}"))),
                }
            });
        })
    };

    let update_task = {
        let api = api.clone();
        Callback::new(move |(id, update): (i64, UpdateTask)| {
            let api = api.clone();
            spawn_local(async move {
                match api.update_task(id, &update).await {
                    Ok(task) => store_update_task(&store, task),
                    Err(ApiError::Unauthorized) => {}
                    Err(e) => set_error.set(Some(format!("Failed to update task: {e}"))),
                }
            });
        })
    };

    let toggle_task = {
        let api = api.clone();
        Callback::new(move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                match api.toggle_task(id).await {
                    Ok(task) => store_update_task(&store, task),
                    Err(ApiError::Unauthorized) => {}
                    Err(e) => set_error.set(Some(format!("Failed to update task status: {e}"))),
                }
            });
        })
    };

    let delete_task = {
        let api = api.clone();
        Callback::new(move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                match api.delete_task(id).await {
                    Ok(()) => store_remove_task(&store, id),
                    Err(ApiError::Unauthorized) => {}
                    Err(e) => set_error.set(Some(format!("Failed to delete task: {e}"))),
                }
            });
        })
    };

    view! {
        <div class="tasks-page">
            <nav class="top-bar">
                <h1>"Todo App"</h1>
                <button class="logout-btn" on:click=move |_| session.end()>"Logout"</button>
            </nav>

            {move || error.get().map(|msg| view! { <div class="error-banner">{msg}</div> })}

            <div class="columns">
                <section class="tasks-column">
                    <h2>"Add New Task"</h2>
                    <TaskForm on_submit=add_task />

                    <h2>"Your Tasks"</h2>
                    <Show when=move || loading.get()>
                        <p class="loading">"Loading tasks..."</p>
                    </Show>
                    <Show when=move || !loading.get() && store.tasks().read().is_empty()>
                        <p class="empty">"No tasks yet. Add a new task to get started!"</p>
                    </Show>

                    <ul class="task-list">
                        <For
                            each=move || store.tasks().get()
                            key=|task| (task.id, task.updated_at.clone(), task.completed)
                            children=move |task| {
                                view! {
                                    <TaskItem
                                        task=task
                                        on_update=update_task
                                        on_toggle=toggle_task
                                        on_delete=delete_task
                                    />
                                }
                            }
                        />
                    </ul>
                </section>

                <section class="chat-column">
                    <ChatInterface />
                </section>
            </div>
        </div>
    }
}
