use super::chat::DocCopilotChat;
use crate::domain::a004_design_document::api::fetch_document;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::safe_dom;
use leptos::prelude::*;
use std::rc::Rc;

/// Document details: compact header, body preview and the Doc Co-Pilot chat.
///
/// The body reaches the DOM only through `safe_dom::render_content`: rich-text
/// content is sanitized, everything else is rendered as plain text.
#[component]
#[allow(non_snake_case)]
pub fn DocumentDetails(id: String, on_close: Rc<dyn Fn(())>) -> impl IntoView {
    let document = RwSignal::new(
        None::<contracts::domain::a004_design_document::aggregate::DesignDocument>,
    );
    let error = RwSignal::new(None::<String>);
    let show_chat = RwSignal::new(false);
    let preview_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new({
        let id = id.clone();
        move |_| {
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_document(&id).await {
                    Ok(doc) => {
                        document.set(Some(doc));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    });

    // Render the body whenever the document or the preview container changes.
    Effect::new(move |_| {
        let doc = document.get();
        if let (Some(container), Some(doc)) = (preview_ref.get(), doc) {
            let container: &web_sys::Element = container.as_ref();
            safe_dom::render_content(container, &doc.content, doc.content_format.is_rich());
        }
    });

    let handle_close = move |_| (on_close)(());

    view! {
        <div class="details details--document">
            <div class="details__header">
                <h2 class="details__title">
                    {move || {
                        document
                            .get()
                            .map(|d| d.base.code.clone())
                            .unwrap_or_else(|| "Loading...".to_string())
                    }}
                </h2>
                <div class="details__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| show_chat.update(|v| *v = !*v)
                    >
                        {icon("chat")}
                        "Co-Pilot"
                    </button>
                    <button class="button button--secondary" on:click=handle_close>
                        {icon("x")}
                        "Close"
                    </button>
                </div>
            </div>

            {move || document.get().map(|d| view! {
                <div class="details__meta">
                    <Badge
                        variant="primary".to_string()
                        text=d.document_type.as_str().to_string()
                    />
                    <span class="details__meta-item">{d.requirement_code.clone()}</span>
                    <Badge variant="neutral".to_string() text=d.status.as_str().to_string() />
                </div>
            })}

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="details__body">
                <div class="document-preview" node_ref=preview_ref></div>

                <Show when=move || show_chat.get()>
                    <DocCopilotChat />
                </Show>
            </div>
        </div>
    }
}
