//! Chat Interface Component
//!
//! Natural-language assistant panel. The user's message is appended
//! immediately, sent with the current conversation id, and the reply
//! appended when it arrives. When the assistant executed tools, a count
//! indicator is shown briefly and then removed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{ApiClient, ApiError};
use crate::models::{ChatMessage, Role};

/// How long the tool-call indicator stays visible, in milliseconds.
const TOOL_INDICATOR_MS: u32 = 2_000;

fn now_iso() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}

/// "HH:MM" slice of an ISO-8601 timestamp.
fn clock_label(iso: &str) -> String {
    iso.chars().skip(11).take(5).collect()
}

/// The first reply establishes the conversation id; replies after that
/// never move an existing conversation.
fn adopt_conversation_id(current: Option<i64>, reply_id: i64) -> Option<i64> {
    Some(current.unwrap_or(reply_id))
}

fn push_message(set_messages: WriteSignal<Vec<ChatMessage>>, role: Role, content: String) {
    set_messages.update(|msgs| {
        msgs.push(ChatMessage {
            role,
            content,
            created_at: Some(now_iso()),
        })
    });
}

#[component]
pub fn ChatInterface() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let (input, set_input) = signal(String::new());
    let (messages, set_messages) = signal(Vec::<ChatMessage>::new());
    let (sending, set_sending) = signal(false);
    let (conversation_id, set_conversation_id) = signal::<Option<i64>>(None);

    let submit = {
        let api = api.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let text = input.get().trim().to_string();
            if text.is_empty() || sending.get() {
                return;
            }

            push_message(set_messages, Role::User, text.clone());
            set_input.set(String::new());
            set_sending.set(true);

            let api = api.clone();
            spawn_local(async move {
                match api.chat(&text, conversation_id.get_untracked()).await {
                    Ok(reply) => {
                        set_conversation_id.set(adopt_conversation_id(
                            conversation_id.get_untracked(),
                            reply.conversation_id,
                        ));
                        push_message(set_messages, Role::Assistant, reply.assistant_response);

                        let tool_count =
                            reply.tool_calls.as_ref().map(Vec::len).unwrap_or(0);
                        if tool_count > 0 {
                            let indicator =
                                format!("🔧 {tool_count} tool(s) executed successfully");
                            push_message(set_messages, Role::Assistant, indicator.clone());
                            spawn_local(async move {
                                TimeoutFuture::new(TOOL_INDICATOR_MS).await;
                                set_messages.update(|msgs| {
                                    msgs.retain(|msg| msg.content != indicator)
                                });
                            });
                        }
                    }
                    Err(ApiError::Unauthorized) => {}
                    Err(e) => {
                        web_sys::console::error_1(&format!("chat request failed: {e}").into());
                        push_message(
                            set_messages,
                            Role::Assistant,
                            "❌ Sorry, I encountered an error processing your request. \
                             Please try again."
                                .to_string(),
                        );
                    }
                }
                set_sending.set(false);
            });
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-header">
                <h3>"AI Assistant"</h3>
                <p>"Manage your tasks using natural language"</p>
            </div>

            <div class="chat-messages">
                {move || {
                    let msgs = messages.get();
                    if msgs.is_empty() {
                        view! {
                            <div class="chat-empty">
                                <p>"Start a conversation with the AI assistant to manage your tasks."</p>
                                <p class="chat-hint">
                                    "Try: \"Add a task to buy groceries\" or \"Show my tasks\""
                                </p>
                            </div>
                        }
                            .into_any()
                    } else {
                        msgs.into_iter()
                            .map(|msg| {
                                let row_class = match msg.role {
                                    Role::User => "chat-row user",
                                    Role::Assistant => "chat-row assistant",
                                };
                                let bubble_class = match msg.role {
                                    Role::User => "chat-bubble user",
                                    Role::Assistant if msg.content.starts_with('❌') => {
                                        "chat-bubble error"
                                    }
                                    Role::Assistant if msg.content.starts_with('🔧') => {
                                        "chat-bubble tool"
                                    }
                                    Role::Assistant => "chat-bubble assistant",
                                };
                                let time = msg.created_at.as_deref().map(clock_label);
                                view! {
                                    <div class=row_class>
                                        <div class=bubble_class>
                                            <div class="chat-text">{msg.content}</div>
                                            {time.map(|t| view! { <div class="chat-time">{t}</div> })}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
                <Show when=move || sending.get()>
                    <div class="chat-row assistant">
                        <div class="chat-bubble assistant">"Thinking..."</div>
                    </div>
                </Show>
            </div>

            <form class="chat-input-row" on:submit=submit>
                <input
                    type="text"
                    placeholder="Type a message to manage your tasks..."
                    prop:value=move || input.get()
                    disabled=move || sending.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input_el = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_input.set(input_el.value());
                    }
                />
                <button type="submit" disabled=move || sending.get()>"Send"</button>
            </form>
            <p class="chat-examples">
                "Examples: \"Add task: Buy groceries\", \"Show my tasks\", \"Complete task 1\""
            </p>
        </div>
    }
}
