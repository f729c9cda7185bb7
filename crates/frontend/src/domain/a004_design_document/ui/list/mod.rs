use crate::domain::a002_requirement::api::fetch_requirements;
use crate::domain::a004_design_document::api::{create_document, fetch_documents};
use crate::domain::a004_design_document::ui::details::DocumentDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::remote::{Remote, RequestSeq};
use crate::shared::toast::ToastService;
use contracts::domain::a004_design_document::aggregate::{
    DesignDocument, DocumentDto, DocumentStatus,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentRow {
    pub id: String,
    pub code: String,
    pub requirement_code: String,
    pub document_type: String,
    pub status: DocumentStatus,
}

impl From<DesignDocument> for DocumentRow {
    fn from(d: DesignDocument) -> Self {
        Self {
            id: d.base.id.as_string(),
            code: d.base.code,
            requirement_code: d.requirement_code,
            document_type: d.document_type.as_str().to_string(),
            status: d.status,
        }
    }
}

fn status_variant(status: DocumentStatus) -> &'static str {
    match status {
        DocumentStatus::Approved => "success",
        DocumentStatus::InReview => "warning",
        DocumentStatus::Draft => "neutral",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DesignDocumentList() -> impl IntoView {
    let (state, set_state) = signal::<Remote<Vec<DocumentRow>>>(Remote::Idle);
    let requests = StoredValue::new(RequestSeq::default());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let fetch = move || {
        let token = requests.try_update_value(|s| s.next()).unwrap_or_default();
        let Some(project_id) = ctx.selected_project_id() else {
            set_state.set(Remote::Idle);
            return;
        };
        set_state.set(Remote::Pending);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_documents(&project_id).await;
            if !requests.with_value(|s| s.is_current(token)) {
                return;
            }
            match result {
                Ok(v) => {
                    set_state.set(Remote::Ready(v.into_iter().map(Into::into).collect()));
                }
                Err(e) => {
                    log::warn!("document list load failed: {}", e);
                    set_state.set(Remote::Failed(e));
                }
            }
        });
    };

    Effect::new(move |_| {
        ctx.selected_project.track();
        fetch();
    });

    let open_document_modal = move |id: String| {
        modal_stack.push_with_frame(
            Some("max-width: min(1100px, 95vw); width: min(1100px, 95vw);".to_string()),
            Some("document-details-modal".to_string()),
            move |handle| {
                let on_close = Rc::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });
                view! {
                    <DocumentDetails id=id.clone() on_close=on_close />
                }
                .into_any()
            },
        );
    };

    let open_create_modal = move || {
        let Some(project_id) = ctx.selected_project_id() else {
            toasts.show("Please select a project from the header first!");
            return;
        };
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            Some("document-create-modal".to_string()),
            move |handle| {
                let on_saved = Rc::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        toasts.show("Document created!");
                        fetch();
                    }
                });
                let on_cancel = Rc::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });

                view! {
                    <NewDocumentDialog
                        project_id=project_id.clone()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
                .into_any()
            },
        );
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Design Documents"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        aria-haspopup="dialog"
                        on:click=move |_| open_create_modal()
                    >
                        {icon("plus")}
                        "New Document"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || state.get().error().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e.to_string()}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Document"</th>
                            <th class="table__header-cell">"Requirement"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if ctx.selected_project.get().is_none() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="5">
                                            "Please select a project from the header first."
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            let rows = state.get().ready().cloned().unwrap_or_default();
                            if rows.is_empty() {
                                let message = if state.get().is_pending() {
                                    "Loading..."
                                } else {
                                    "No documents yet."
                                };
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="5">
                                            {message}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|row| {
                                    let status = row.status;
                                    let id_for_open = row.id.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell"><b>{row.code.clone()}</b></td>
                                            <td class="table__cell">{row.requirement_code.clone()}</td>
                                            <td class="table__cell">
                                                <Badge
                                                    variant="primary".to_string()
                                                    text=row.document_type.clone()
                                                />
                                            </td>
                                            <td class="table__cell">
                                                <Badge
                                                    variant=status_variant(status).to_string()
                                                    text=status.as_str().to_string()
                                                />
                                            </td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--small"
                                                    on:click=move |_| open_document_modal(id_for_open.clone())
                                                >
                                                    "Open"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Document creation form. The requirement dropdown is fetched when the
/// dialog opens, so it reflects requirements created since the last open.
#[component]
#[allow(non_snake_case)]
fn NewDocumentDialog(
    project_id: String,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let form = RwSignal::new(DocumentDto {
        project_id: project_id.clone(),
        document_type: "FS".to_string(),
        ..DocumentDto::default()
    });
    let requirement_options = RwSignal::new(Vec::<(String, String)>::new());
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    Effect::new({
        let project_id = project_id.clone();
        move |_| {
            let project_id = project_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_requirements(Some(&project_id), "", "", "").await {
                    Ok(list) => {
                        requirement_options.set(
                            list.into_iter()
                                .map(|r| {
                                    let label =
                                        format!("{} - {}", r.base.code, r.base.description);
                                    (r.base.id.as_string(), label)
                                })
                                .collect(),
                        );
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    });

    let handle_save = {
        let on_saved = on_saved.clone();
        move |_| {
            let current = form.get_untracked();
            if current.requirement_id.is_empty() {
                error.set(Some("Select a requirement".to_string()));
                return;
            }
            let on_saved = on_saved.clone();
            is_saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match create_document(&current).await {
                    Ok(_) => {
                        is_saving.set(false);
                        (on_saved)(());
                    }
                    Err(e) => {
                        is_saving.set(false);
                        error.set(Some(e));
                    }
                }
            });
        }
    };
    let handle_cancel = move |_| (on_cancel)(());

    view! {
        <div class="details">
            <div class="details__header">
                <h2 class="details__title">"New Design Document"</h2>
                <div class="details__actions">
                    <button
                        class="button button--primary"
                        disabled=move || is_saving.get()
                        on:click=handle_save
                    >
                        {move || if is_saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button class="button button--secondary" on:click=handle_cancel>
                        {icon("x")}
                        "Cancel"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="form">
                <div class="form__field">
                    <label class="form__label" for="doc-requirement">"Requirement *"</label>
                    <select
                        id="doc-requirement"
                        class="form__input"
                        prop:value=move || form.get().requirement_id
                        on:change=move |ev| {
                            form.update(|f| f.requirement_id = event_target_value(&ev))
                        }
                    >
                        <option value="">"-- Select Requirement --"</option>
                        <For
                            each=move || requirement_options.get()
                            key=|(id, _)| id.clone()
                            let:option
                        >
                            <option value=option.0.clone()>{option.1.clone()}</option>
                        </For>
                    </select>
                </div>
                <div class="form__field">
                    <label class="form__label" for="doc-type">"Document Type"</label>
                    <select
                        id="doc-type"
                        class="form__input"
                        prop:value=move || form.get().document_type
                        on:change=move |ev| {
                            form.update(|f| f.document_type = event_target_value(&ev))
                        }
                    >
                        <option value="FS">"FS - Functional Specification"</option>
                        <option value="TS">"TS - Technical Specification"</option>
                    </select>
                </div>
            </div>
        </div>
    }
}
