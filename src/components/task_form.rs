//! Task Form Component
//!
//! Form for creating a new task. Title is required and trimmed; an empty
//! description is sent as absent rather than as an empty string.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::CreateTask;

#[component]
pub fn TaskForm(#[prop(into)] on_submit: Callback<CreateTask>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get().trim().to_string();
        if title_value.is_empty() {
            return;
        }
        let description_value = description.get().trim().to_string();

        on_submit.run(CreateTask {
            title: title_value,
            description: (!description_value.is_empty()).then_some(description_value),
        });

        set_title.set(String::new());
        set_description.set(String::new());
    };

    view! {
        <form class="task-form" on:submit=submit>
            <input
                type="text"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <textarea
                placeholder="Task description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_description.set(input.value());
                }
            ></textarea>
            <button type="submit">"Add Task"</button>
        </form>
    }
}
