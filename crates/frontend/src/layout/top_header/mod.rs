use crate::domain::a001_project::api::fetch_projects;
use crate::domain::a001_project::ui::list::status_variant;
use crate::layout::global_context::{AppGlobalContext, SelectedProject};
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::remote::RequestSeq;
use crate::shared::toast::ToastService;
use contracts::domain::a001_project::aggregate::ProjectStatus;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct ProjectOption {
    id: String,
    code: String,
    name: String,
    status: String,
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <header class="top-header">
            <button
                class="top-header__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| ctx.toggle_left()
            >
                {icon("menu")}
            </button>
            <h1 class="top-header__brand">"AI Project Co-Pilot"</h1>
            <div class="top-header__project">
                <ProjectSelect />
            </div>
        </header>
    }
}

/// Global project selector.
///
/// Loads the project list once, restores the persisted selection, and adopts
/// the chosen project into `AppGlobalContext` on change.
#[component]
fn ProjectSelect() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (options, set_options) = signal::<Vec<ProjectOption>>(Vec::new());
    let requests = StoredValue::new(RequestSeq::default());

    let load = move || {
        let token = requests.try_update_value(|s| s.next()).unwrap_or_default();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_projects().await;
            if !requests.with_value(|s| s.is_current(token)) {
                return;
            }
            match result {
                Ok(projects) => {
                    let opts: Vec<ProjectOption> = projects
                        .iter()
                        .map(|p| ProjectOption {
                            id: p.base.id.as_string(),
                            code: p.base.code.clone(),
                            name: p.base.description.clone(),
                            status: p.status.as_str().to_string(),
                        })
                        .collect();

                    // Resolve the persisted selection once the list is known.
                    if ctx.selected_project.get_untracked().is_none() {
                        if let Some(stored) = AppGlobalContext::stored_project_id() {
                            if let Some(p) = opts.iter().find(|p| p.id == stored) {
                                ctx.selected_project.set(Some(SelectedProject {
                                    id: p.id.clone(),
                                    code: p.code.clone(),
                                    status: p.status.clone(),
                                }));
                            }
                        }
                    }

                    set_options.set(opts);
                }
                Err(e) => log::warn!("project dropdown load failed: {}", e),
            }
        });
    };
    load();

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if value.is_empty() {
            ctx.select_project(None);
        } else if let Some(p) = options.get_untracked().iter().find(|p| p.id == value) {
            ctx.select_project(Some(SelectedProject {
                id: p.id.clone(),
                code: p.code.clone(),
                status: p.status.clone(),
            }));
            toasts.show("Project selected!");
        }
    };

    let status_badge_variant = move || {
        ctx.selected_project
            .get()
            .and_then(|p| ProjectStatus::parse(&p.status).ok())
            .map(status_variant)
            .unwrap_or("neutral")
            .to_string()
    };

    view! {
        <select
            class="top-header__select"
            aria-label="Working project"
            prop:value=move || ctx.selected_project.get().map(|p| p.id).unwrap_or_default()
            on:change=on_change
        >
            <option value="">"-- Select Project --"</option>
            <For
                each=move || options.get()
                key=|p| p.id.clone()
                let:p
            >
                <option value=p.id.clone()>{format!("{} - {}", p.code, p.name)}</option>
            </For>
        </select>
        <Show when=move || ctx.selected_project.get().is_some()>
            <Badge
                variant=Signal::derive(status_badge_variant)
                text=Signal::derive(move || {
                    ctx.selected_project.get().map(|p| p.status).unwrap_or_default()
                })
            />
        </Show>
    }
}
