//! Login Page Component
//!
//! Email/password form with a register mode. A successful login begins the
//! session, which switches the app to the task list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ApiClient;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (registering, set_registering) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let submit = {
        let api = api.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let email_value = email.get();
            let password_value = password.get();
            if email_value.is_empty() || password_value.is_empty() || busy.get() {
                return;
            }
            set_error.set(None);
            set_notice.set(None);
            set_busy.set(true);

            let api = api.clone();
            spawn_local(async move {
                if registering.get_untracked() {
                    match api.register(&email_value, &password_value).await {
                        Ok(_) => {
                            set_registering.set(false);
                            set_notice.set(Some("Account created. Sign in to continue.".into()));
                        }
                        Err(e) => set_error.set(Some(e.to_string())),
                    }
                } else if let Err(e) = api.login(&email_value, &password_value).await {
                    set_error.set(Some(e.to_string()));
                }
                set_busy.set(false);
            });
        }
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=submit>
                <h1>{move || if registering.get() { "Create Account" } else { "Sign In" }}</h1>

                {move || notice.get().map(|msg| view! { <div class="notice">{msg}</div> })}
                {move || error.get().map(|msg| view! { <div class="error-banner">{msg}</div> })}

                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_email.set(input.value());
                    }
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />

                <button type="submit" disabled=move || busy.get()>
                    {move || {
                        if busy.get() {
                            "Please wait..."
                        } else if registering.get() {
                            "Create account"
                        } else {
                            "Sign in"
                        }
                    }}
                </button>

                <button
                    type="button"
                    class="link-btn"
                    on:click=move |_| {
                        set_error.set(None);
                        set_notice.set(None);
                        set_registering.update(|r| *r = !*r);
                    }
                >
                    {move || {
                        if registering.get() {
                            "Already have an account? Sign in"
                        } else {
                            "New here? Create an account"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
