use crate::domain::a001_project::api::fetch_projects;
use crate::domain::a001_project::ui::details::ProjectDetails;
use crate::layout::global_context::{AppGlobalContext, SelectedProject};
use crate::shared::components::ui::badge::Badge;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::remote::{Remote, RequestSeq};
use crate::shared::toast::ToastService;
use contracts::domain::a001_project::aggregate::{Project, ProjectStatus};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub customer_name: String,
    pub status: ProjectStatus,
    pub modules: String,
    pub created_at: String,
}

impl From<Project> for ProjectRow {
    fn from(p: Project) -> Self {
        Self {
            id: p.base.id.as_string(),
            code: p.base.code,
            name: p.base.description,
            customer_name: p.customer_name,
            status: p.status,
            modules: p.modules,
            created_at: format_timestamp(&p.base.metadata.created_at),
        }
    }
}

/// Badge variant for a project status pill.
pub fn status_variant(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "success",
        ProjectStatus::Planning => "primary",
        ProjectStatus::OnHold => "warning",
        ProjectStatus::Closed => "neutral",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let (state, set_state) = signal::<Remote<Vec<ProjectRow>>>(Remote::Idle);
    let requests = StoredValue::new(RequestSeq::default());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let fetch = move || {
        let token = requests.try_update_value(|s| s.next()).unwrap_or_default();
        set_state.set(Remote::Pending);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_projects().await;
            if !requests.with_value(|s| s.is_current(token)) {
                return; // superseded by a newer request
            }
            match result {
                Ok(v) => {
                    set_state.set(Remote::Ready(v.into_iter().map(Into::into).collect()));
                }
                Err(e) => {
                    log::warn!("project list load failed: {}", e);
                    set_state.set(Remote::Failed(e));
                }
            }
        });
    };

    // Open the creation dialog via the centralized stack.
    let open_create_modal = move || {
        // close any previous dialog opened from this list
        modal_stack.clear();
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            Some("project-details-modal".to_string()),
            move |handle| {
                let on_saved = Rc::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        toasts.show("Project created!");
                        fetch();
                    }
                });
                let on_cancel = Rc::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });

                view! {
                    <ProjectDetails on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let select_project = move |row: &ProjectRow| {
        ctx.select_project(Some(SelectedProject {
            id: row.id.clone(),
            code: row.code.clone(),
            status: row.status.as_str().to_string(),
        }));
        toasts.show("Project selected!");
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Project::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        aria-haspopup="dialog"
                        on:click=move |_| open_create_modal()
                    >
                        {icon("plus")}
                        "New Project"
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
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Modules"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = state.get().ready().cloned().unwrap_or_default();
                            if rows.is_empty() {
                                let message = if state.get().is_pending() {
                                    "Loading..."
                                } else {
                                    "No projects found."
                                };
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="7">
                                            {message}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|row| {
                                    let status = row.status;
                                    let row_for_select = row.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell"><b>{row.code.clone()}</b></td>
                                            <td class="table__cell">{row.name.clone()}</td>
                                            <td class="table__cell">{row.customer_name.clone()}</td>
                                            <td class="table__cell">
                                                <Badge
                                                    variant=status_variant(status).to_string()
                                                    text=status.as_str().to_string()
                                                />
                                            </td>
                                            <td class="table__cell">{row.modules.clone()}</td>
                                            <td class="table__cell">{row.created_at.clone()}</td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--small"
                                                    on:click=move |_| select_project(&row_for_select)
                                                >
                                                    "Select"
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
