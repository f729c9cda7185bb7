use crate::dashboards::d400_overview::api::get_overview_stats;
use crate::domain::a003_analysis_session::ui::list::open_session_modal;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::Badge;
use crate::shared::date_utils::format_iso_datetime;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::remote::{Remote, RequestSeq};
use contracts::dashboards::d400_overview::{OverviewStats, RecentActivity};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let (state, set_state) = signal::<Remote<OverviewStats>>(Remote::Idle);
    let requests = StoredValue::new(RequestSeq::default());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let fetch = move || {
        let token = requests.try_update_value(|s| s.next()).unwrap_or_default();
        let project_id = ctx.selected_project_id();
        set_state.set(Remote::Pending);
        wasm_bindgen_futures::spawn_local(async move {
            let result = get_overview_stats(project_id.as_deref()).await;
            if !requests.with_value(|s| s.is_current(token)) {
                return;
            }
            match result {
                Ok(stats) => set_state.set(Remote::Ready(stats)),
                Err(e) => {
                    log::warn!("dashboard stats load failed: {}", e);
                    set_state.set(Remote::Failed(e));
                }
            }
        });
    };

    Effect::new(move |_| {
        ctx.selected_project.track();
        fetch();
    });

    let subtitle = move || {
        state
            .get()
            .ready()
            .and_then(|s| {
                s.project_name.as_ref().map(|name| {
                    format!(
                        "Project: {} - {}",
                        name,
                        s.project_status.as_deref().unwrap_or("-")
                    )
                })
            })
            .unwrap_or_else(|| {
                "Select a project from the header to see project-specific data".to_string()
            })
    };

    let stat = move |pick: fn(&OverviewStats) -> u64| {
        Signal::derive(move || state.get().ready().map(pick))
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard"</h1>
                    <p class="header__subtitle">{subtitle}</p>
                </div>
                <div class="header__actions">
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

            <div class="stat-grid">
                <StatCard
                    label="Projects".to_string()
                    icon_name="projects".to_string()
                    value=stat(|s| s.total_projects)
                />
                <StatCard
                    label="Sessions".to_string()
                    icon_name="analysis".to_string()
                    value=stat(|s| s.total_sessions)
                />
                <StatCard
                    label="Open Questions".to_string()
                    icon_name="question".to_string()
                    value=stat(|s| s.total_questions)
                />
                <StatCard
                    label="Gaps".to_string()
                    icon_name="alert".to_string()
                    value=stat(|s| s.total_gaps)
                />
            </div>

            <h3 class="details__section-title">"Recent Activities"</h3>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Session"</th>
                            <th class="table__header-cell">"Module"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let activities = state
                                .get()
                                .ready()
                                .map(|s| s.recent_activities.clone())
                                .unwrap_or_default();
                            if activities.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="4">
                                            "No recent activities"
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                activities.into_iter().map(|act| {
                                    activity_row(act, modal_stack)
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// One recent-activity row. Rows open the session dialog and are
/// keyboard-activatable like a button.
fn activity_row(act: RecentActivity, modal_stack: ModalStackService) -> impl IntoView {
    let id_for_click = act.id.clone();
    let id_for_key = act.id.clone();
    let status = act.status.clone();
    let status_variant = if act.status == "Completed" {
        "success"
    } else {
        "warning"
    };

    view! {
        <tr
            class="table__row table__row--clickable"
            tabindex="0"
            role="button"
            on:click=move |_| open_session_modal(modal_stack, id_for_click.clone())
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    open_session_modal(modal_stack, id_for_key.clone());
                }
            }
        >
            <td class="table__cell">{act.session_name.clone()}</td>
            <td class="table__cell">
                <Badge
                    variant="primary".to_string()
                    text=act.module.clone().unwrap_or_default()
                />
            </td>
            <td class="table__cell">
                <Badge variant=status_variant.to_string() text=status />
            </td>
            <td class="table__cell">
                {act.created_at
                    .as_deref()
                    .map(format_iso_datetime)
                    .unwrap_or_else(|| "-".to_string())}
            </td>
        </tr>
    }
}
