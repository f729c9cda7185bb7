use crate::domain::a002_requirement::MODULE_OPTIONS;
use crate::domain::a003_analysis_session::api::{create_session, fetch_sessions};
use crate::domain::a003_analysis_session::ui::details::SessionDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::remote::{Remote, RequestSeq};
use crate::shared::toast::ToastService;
use contracts::domain::a003_analysis_session::aggregate::{
    AnalysisSession, SessionDto, SessionStatus,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct SessionRow {
    pub id: String,
    pub name: String,
    pub module: String,
    pub process_name: String,
    pub status: SessionStatus,
}

impl From<AnalysisSession> for SessionRow {
    fn from(s: AnalysisSession) -> Self {
        Self {
            id: s.base.id.as_string(),
            name: s.base.description,
            module: s.module,
            process_name: s.process_name,
            status: s.status,
        }
    }
}

pub fn status_variant(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Completed => "success",
        SessionStatus::InProgress => "warning",
        SessionStatus::Planned => "neutral",
    }
}

/// Opens the session details dialog. Shared with the dashboard's
/// recent-activities table.
pub fn open_session_modal(modal_stack: ModalStackService, session_id: String) {
    modal_stack.push_with_frame(
        Some("max-width: min(900px, 95vw); width: min(900px, 95vw);".to_string()),
        Some("session-details-modal".to_string()),
        move |handle| {
            let on_close = Rc::new({
                let handle = handle.clone();
                move |_| handle.close()
            });
            view! {
                <SessionDetails id=session_id.clone() on_close=on_close />
            }
            .into_any()
        },
    );
}

#[component]
#[allow(non_snake_case)]
pub fn AnalysisSessionList() -> impl IntoView {
    let (state, set_state) = signal::<Remote<Vec<SessionRow>>>(Remote::Idle);
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
            let result = fetch_sessions(&project_id).await;
            if !requests.with_value(|s| s.is_current(token)) {
                return;
            }
            match result {
                Ok(v) => {
                    set_state.set(Remote::Ready(v.into_iter().map(Into::into).collect()));
                }
                Err(e) => {
                    log::warn!("session list load failed: {}", e);
                    set_state.set(Remote::Failed(e));
                }
            }
        });
    };

    Effect::new(move |_| {
        ctx.selected_project.track();
        fetch();
    });

    let open_create_modal = move || {
        let Some(project_id) = ctx.selected_project_id() else {
            toasts.show("Please select a project from the header first!");
            return;
        };
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            Some("session-create-modal".to_string()),
            move |handle| {
                let on_saved = Rc::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        toasts.show("Session created!");
                        fetch();
                    }
                });
                let on_cancel = Rc::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });

                view! {
                    <NewSessionDialog
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
                    <h1 class="header__title">"Analysis Sessions"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        aria-haspopup="dialog"
                        on:click=move |_| open_create_modal()
                    >
                        {icon("plus")}
                        "New Session"
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
                            <th class="table__header-cell">"Session"</th>
                            <th class="table__header-cell">"Module"</th>
                            <th class="table__header-cell">"Process"</th>
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
                                    "No sessions yet. Start a new session!"
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
                                            <td class="table__cell">{row.name.clone()}</td>
                                            <td class="table__cell">
                                                <Badge variant="primary".to_string() text=row.module.clone() />
                                            </td>
                                            <td class="table__cell">{row.process_name.clone()}</td>
                                            <td class="table__cell">
                                                <Badge
                                                    variant=status_variant(status).to_string()
                                                    text=status.as_str().to_string()
                                                />
                                            </td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--small"
                                                    on:click=move |_| {
                                                        open_session_modal(modal_stack, id_for_open.clone())
                                                    }
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

/// Session creation form.
#[component]
#[allow(non_snake_case)]
fn NewSessionDialog(
    project_id: String,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let form = RwSignal::new(SessionDto {
        project_id,
        module: MODULE_OPTIONS[0].to_string(),
        ..SessionDto::default()
    });
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    let handle_save = {
        let on_saved = on_saved.clone();
        move |_| {
            let current = form.get_untracked();
            if current.session_name.trim().is_empty() || current.module.trim().is_empty() {
                error.set(Some("Session Name and Module are required".to_string()));
                return;
            }
            let on_saved = on_saved.clone();
            is_saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match create_session(&current).await {
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
                <h2 class="details__title">"New Analysis Session"</h2>
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
                    <label class="form__label" for="session-name">"Session Name *"</label>
                    <input
                        id="session-name"
                        class="form__input"
                        prop:value=move || form.get().session_name
                        on:input=move |ev| {
                            form.update(|f| f.session_name = event_target_value(&ev))
                        }
                    />
                </div>
                <div class="form__field">
                    <label class="form__label" for="session-module">"Module *"</label>
                    <select
                        id="session-module"
                        class="form__input"
                        prop:value=move || form.get().module
                        on:change=move |ev| form.update(|f| f.module = event_target_value(&ev))
                    >
                        {MODULE_OPTIONS.into_iter().map(|m| view! {
                            <option value=m>{m}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form__field">
                    <label class="form__label" for="session-process">"Process Area"</label>
                    <input
                        id="session-process"
                        class="form__input"
                        placeholder="Order to Cash"
                        prop:value=move || form.get().process_name
                        on:input=move |ev| {
                            form.update(|f| f.process_name = event_target_value(&ev))
                        }
                    />
                </div>
            </div>
        </div>
    }
}
