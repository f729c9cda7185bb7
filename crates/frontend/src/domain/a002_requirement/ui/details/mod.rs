use crate::domain::a002_requirement::api;
use crate::domain::a002_requirement::MODULE_OPTIONS;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::a002_requirement::aggregate::RequirementDto;
use leptos::prelude::*;
use std::rc::Rc;

/// Requirement creation form, shown in a dialog from the requirements list.
#[component]
#[allow(non_snake_case)]
pub fn AddRequirementDialog(
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let form = RwSignal::new(RequirementDto {
        module: MODULE_OPTIONS[0].to_string(),
        complexity: "Medium".to_string(),
        ..RequirementDto::default()
    });
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    let handle_save = {
        let on_saved = on_saved.clone();
        move |_| {
            let mut current = form.get_untracked();
            if current.code.trim().is_empty() || current.title.trim().is_empty() {
                error.set(Some("Code and Title are required".to_string()));
                return;
            }
            let Some(project_id) = ctx.selected_project_id() else {
                error.set(Some("No project selected".to_string()));
                return;
            };
            current.project_id = project_id;

            let on_saved = on_saved.clone();
            is_saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::create_requirement(&current).await {
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
                <h2 class="details__title">"Add Requirement"</h2>
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
                    <label class="form__label" for="req-code">"Code *"</label>
                    <input
                        id="req-code"
                        class="form__input"
                        placeholder="REQ-FI-0001"
                        prop:value=move || form.get().code
                        on:input=move |ev| form.update(|f| f.code = event_target_value(&ev))
                    />
                </div>
                <div class="form__field">
                    <label class="form__label" for="req-title">"Title *"</label>
                    <input
                        id="req-title"
                        class="form__input"
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>
                <div class="form__field">
                    <label class="form__label" for="req-module">"Module"</label>
                    <select
                        id="req-module"
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
                    <label class="form__label" for="req-complexity">"Complexity"</label>
                    <select
                        id="req-complexity"
                        class="form__input"
                        prop:value=move || form.get().complexity
                        on:change=move |ev| {
                            form.update(|f| f.complexity = event_target_value(&ev))
                        }
                    >
                        <option value="Low">"Low"</option>
                        <option value="Medium">"Medium"</option>
                        <option value="High">"High"</option>
                    </select>
                </div>
            </div>
        </div>
    }
}
