//! Task Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the task
//! list. Helpers only ever apply the server's authoritative copy of a task,
//! never a locally guessed result.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;

#[derive(Clone, Debug, Default, Store)]
pub struct TaskState {
    /// Tasks fetched for the current page load
    pub tasks: Vec<Task>,
}

/// Type alias for the store
pub type TaskStore = Store<TaskState>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list with the server's copy
pub fn store_replace_tasks(store: &TaskStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

/// Append a task returned by a create call
pub fn store_add_task(store: &TaskStore, task: Task) {
    store.tasks().write().push(task);
}

/// Update a task in the store by ID
pub fn store_update_task(store: &TaskStore, updated: Task) {
    update_by_id(&mut store.tasks().write(), updated);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &TaskStore, task_id: i64) {
    remove_by_id(&mut store.tasks().write(), task_id);
}

fn update_by_id(tasks: &mut [Task], updated: Task) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == updated.id) {
        *task = updated;
    }
}

fn remove_by_id(tasks: &mut Vec<Task>, task_id: i64) {
    tasks.retain(|task| task.id != task_id);
}
