use crate::domain::a002_requirement::api::fetch_requirements;
use crate::domain::a002_requirement::ui::details::AddRequirementDialog;
use crate::domain::a002_requirement::MODULE_OPTIONS;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::remote::{Remote, RequestSeq};
use crate::shared::toast::ToastService;
use contracts::domain::a002_requirement::aggregate::{
    AiCoverage, Requirement, RequirementStatus,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct RequirementRow {
    pub id: String,
    pub code: String,
    pub title: String,
    pub module: String,
    pub complexity: String,
    pub status: RequirementStatus,
    pub ai_coverage: AiCoverage,
}

impl From<Requirement> for RequirementRow {
    fn from(r: Requirement) -> Self {
        Self {
            id: r.base.id.as_string(),
            code: r.base.code,
            title: r.base.description,
            module: r.module,
            complexity: r.complexity.as_str().to_string(),
            status: r.status,
            ai_coverage: r.ai_coverage,
        }
    }
}

fn status_variant(status: RequirementStatus) -> &'static str {
    match status {
        RequirementStatus::Ready => "success",
        RequirementStatus::InReview => "warning",
        RequirementStatus::Draft => "neutral",
    }
}

fn ai_coverage_label(coverage: AiCoverage) -> &'static str {
    match coverage {
        AiCoverage::Full => "✦ Full",
        AiCoverage::Partial => "◐ Partial",
        AiCoverage::None => "○ None",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RequirementList() -> impl IntoView {
    let (state, set_state) = signal::<Remote<Vec<RequirementRow>>>(Remote::Idle);
    let requests = StoredValue::new(RequestSeq::default());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let fetch = move || {
        let token = requests.try_update_value(|s| s.next()).unwrap_or_default();
        let project_id = ctx.selected_project_id();
        let filter = ctx.requirement_filter.get_untracked();
        set_state.set(Remote::Pending);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_requirements(
                project_id.as_deref(),
                &filter.module,
                &filter.status,
                &filter.search,
            )
            .await;
            // A newer fetch (filter keystroke, project switch) may have been
            // issued while this one was in flight; its result wins.
            if !requests.with_value(|s| s.is_current(token)) {
                return;
            }
            match result {
                Ok(v) => {
                    set_state.set(Remote::Ready(v.into_iter().map(Into::into).collect()));
                }
                Err(e) => {
                    log::warn!("requirement list load failed: {}", e);
                    set_state.set(Remote::Failed(e));
                }
            }
        });
    };

    // Refetch whenever the filter or the selected project changes.
    Effect::new(move |_| {
        ctx.requirement_filter.track();
        ctx.selected_project.track();
        fetch();
    });

    let open_create_modal = move || {
        if ctx.selected_project_id().is_none() {
            toasts.show("Please select a project from the header first!");
            return;
        }
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            Some("requirement-details-modal".to_string()),
            move |handle| {
                let on_saved = Rc::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        toasts.show("Requirement saved!");
                        fetch();
                    }
                });
                let on_cancel = Rc::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });

                view! {
                    <AddRequirementDialog on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Requirements"</h1>
                    <p class="header__subtitle">
                        {move || {
                            state
                                .get()
                                .ready()
                                .map(|rows| format!("All Objects ({})", rows.len()))
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        aria-haspopup="dialog"
                        on:click=move |_| open_create_modal()
                    >
                        {icon("plus")}
                        "Add Requirement"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="filter-bar">
                <select
                    class="filter-bar__select"
                    aria-label="Filter by module"
                    prop:value=move || ctx.requirement_filter.get().module
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.requirement_filter.update(|f| f.module = value);
                    }
                >
                    <option value="">"All Modules"</option>
                    {MODULE_OPTIONS.into_iter().map(|m| view! {
                        <option value=m>{m}</option>
                    }).collect_view()}
                </select>
                <select
                    class="filter-bar__select"
                    aria-label="Filter by status"
                    prop:value=move || ctx.requirement_filter.get().status
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.requirement_filter.update(|f| f.status = value);
                    }
                >
                    <option value="">"All Statuses"</option>
                    <option value="Draft">"Draft"</option>
                    <option value="InReview">"In Review"</option>
                    <option value="Ready">"Ready"</option>
                </select>
                <input
                    class="filter-bar__search"
                    type="search"
                    aria-label="Search requirements"
                    placeholder="Search..."
                    prop:value=move || ctx.requirement_filter.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.requirement_filter.update(|f| f.search = value);
                    }
                />
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
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Module"</th>
                            <th class="table__header-cell">"Complexity"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"AI"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = state.get().ready().cloned().unwrap_or_default();
                            if rows.is_empty() {
                                let message = if state.get().is_pending() {
                                    "Loading..."
                                } else {
                                    "No requirements found."
                                };
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="6">
                                            {message}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|row| {
                                    let status = row.status;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell"><b>{row.code.clone()}</b></td>
                                            <td class="table__cell">{row.title.clone()}</td>
                                            <td class="table__cell">
                                                <Badge variant="primary".to_string() text=row.module.clone() />
                                            </td>
                                            <td class="table__cell">{row.complexity.clone()}</td>
                                            <td class="table__cell">
                                                <Badge
                                                    variant=status_variant(status).to_string()
                                                    text=status.as_str().to_string()
                                                />
                                            </td>
                                            <td class="table__cell table__cell--ai">
                                                {ai_coverage_label(row.ai_coverage)}
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
