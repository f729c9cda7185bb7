//! Doc Co-Pilot chat widget.
//!
//! The transcript is append-only: messages are never edited or removed while
//! the widget is mounted, and every entry renders its content as a text node,
//! whatever the user typed. The assistant reply is mocked until the
//! generation pipeline is wired to the backend.

use contracts::domain::a004_design_document::aggregate::{ChatRole, DocChatMessage};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Latency of the mocked assistant, in milliseconds.
const MOCK_REPLY_DELAY_MS: u32 = 500;

fn assistant_reply(text: &str) -> String {
    format!(
        "AI: I'll help you with \"{}\". This feature is coming soon!",
        text
    )
}

#[component]
#[allow(non_snake_case)]
pub fn DocCopilotChat() -> impl IntoView {
    let messages = RwSignal::new(Vec::<DocChatMessage>::new());
    let new_message = RwSignal::new(String::new());
    let is_typing = RwSignal::new(false);
    let transcript_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = transcript_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let handle_send = Callback::new(move |_: ()| {
        let text = new_message.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        new_message.set(String::new());

        messages.update(|m| m.push(DocChatMessage::user(text.clone())));
        is_typing.set(true);
        scroll_to_bottom();

        spawn_local(async move {
            // keep the original mock latency
            TimeoutFuture::new(MOCK_REPLY_DELAY_MS).await;
            is_typing.set(false);
            messages.update(|m| m.push(DocChatMessage::assistant(assistant_reply(&text))));
            scroll_to_bottom();
        });
    });

    view! {
        <div class="doc-chat">
            <div class="doc-chat__transcript" node_ref=transcript_ref>
                <For
                    each=move || messages.get()
                    key=|msg| msg.id.to_string()
                    let:msg
                >
                    {{
                        let is_user = msg.role == ChatRole::User;
                        view! {
                            <div
                                class="doc-chat__entry"
                                class:doc-chat__entry--user=is_user
                                class:doc-chat__entry--assistant=!is_user
                            >
                                <span class="doc-chat__bubble">{msg.content.clone()}</span>
                            </div>
                        }
                    }}
                </For>

                <Show when=move || is_typing.get()>
                    <div class="doc-chat__entry doc-chat__entry--assistant">
                        <span class="doc-chat__typing">"AI is typing..."</span>
                    </div>
                </Show>
            </div>

            <Flex style="gap: 8px; align-items: flex-end;">
                <div style="flex: 1;">
                    <Textarea
                        value=new_message
                        placeholder="Ask the co-pilot... (Ctrl+Enter to send)"
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && ev.ctrl_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| handle_send.run(())
                >
                    {crate::shared::icons::icon("send")}
                    " Send"
                </Button>
            </Flex>
        </div>
    }
}
