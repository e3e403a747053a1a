//! Task Item Component
//!
//! A single task row: completion checkbox, inline edit, and a two-step
//! delete confirmation. Mutations are delegated to the page via callbacks;
//! the row itself never talks to the server.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{Task, UpdateTask};

#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] on_update: Callback<(i64, UpdateTask)>,
    #[prop(into)] on_toggle: Callback<i64>,
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;
    let created_date: String = task.created_at.chars().take(10).collect();

    let (editing, set_editing) = signal(false);
    let (confirm_delete, set_confirm_delete) = signal(false);
    let (title, set_title) = signal(task.title.clone());
    let (description, set_description) = signal(task.description.clone().unwrap_or_default());

    let display_title = task.title.clone();
    let display_description = task.description.clone();
    let original_title = task.title;
    let original_description = task.description.unwrap_or_default();

    let save = move |_| {
        let title_value = title.get().trim().to_string();
        if title_value.is_empty() {
            return;
        }
        // Description is replaced wholesale so the user can clear it.
        on_update.run((
            id,
            UpdateTask {
                title: Some(title_value),
                description: Some(description.get().trim().to_string()),
                completed: None,
            },
        ));
        set_editing.set(false);
    };

    let cancel = move |_| {
        set_title.set(original_title.clone());
        set_description.set(original_description.clone());
        set_editing.set(false);
    };

    view! {
        <li class=move || if completed { "task-row completed" } else { "task-row" }>
            <input type="checkbox" checked=completed on:change=move |_| on_toggle.run(id) />

            <div class="task-body">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <p class="task-title">{display_title.clone()}</p>
                            {display_description
                                .clone()
                                .map(|text| view! { <p class="task-description">{text}</p> })}
                        }
                    }
                >
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_title.set(input.value());
                        }
                    />
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_description.set(input.value());
                        }
                    ></textarea>
                </Show>
            </div>

            <span class="task-date">{created_date}</span>

            <div class="task-actions">
                <Show when=move || editing.get()>
                    <button class="save-btn" on:click=save>"Save"</button>
                    <button class="cancel-btn" on:click=cancel.clone()>"Cancel"</button>
                </Show>
                <Show when=move || !editing.get() && !confirm_delete.get()>
                    <button class="edit-btn" on:click=move |_| set_editing.set(true)>"Edit"</button>
                    <button class="delete-btn" on:click=move |_| set_confirm_delete.set(true)>
                        "Delete"
                    </button>
                </Show>
                <Show when=move || !editing.get() && confirm_delete.get()>
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">"Delete?"</span>
                        <button class="confirm-btn" on:click=move |_| on_delete.run(id)>"✓"</button>
                        <button
                            class="cancel-btn"
                            on:click=move |_| set_confirm_delete.set(false)
                        >
                            "✗"
                        </button>
                    </span>
                </Show>
            </div>
        </li>
    }
}
