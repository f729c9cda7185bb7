use super::view_model::ProjectDetailsVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

/// Project creation form, shown in a dialog from the project list.
#[component]
#[allow(non_snake_case)]
pub fn ProjectDetails(
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ProjectDetailsVm::new();

    let handle_save = {
        let on_saved = on_saved.clone();
        move |_| vm.save_command(on_saved.clone())
    };
    let handle_cancel = move |_| (on_cancel)(());

    view! {
        <div class="details">
            <div class="details__header">
                <h2 class="details__title">"Create New Project"</h2>
                <div class="details__actions">
                    <button
                        class="button button--primary"
                        disabled=move || vm.is_saving.get() || !vm.is_form_valid()
                        on:click=handle_save
                    >
                        {move || if vm.is_saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button class="button button--secondary" on:click=handle_cancel>
                        {icon("x")}
                        "Cancel"
                    </button>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="form">
                <div class="form__field">
                    <label class="form__label" for="project-code">"Project Code *"</label>
                    <input
                        id="project-code"
                        class="form__input"
                        placeholder="PRJ-2026-001"
                        prop:value=move || vm.form.get().code
                        on:input=move |ev| vm.form.update(|f| f.code = event_target_value(&ev))
                    />
                </div>
                <div class="form__field">
                    <label class="form__label" for="project-name">"Project Name *"</label>
                    <input
                        id="project-name"
                        class="form__input"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form__field">
                    <label class="form__label" for="project-customer">"Customer"</label>
                    <input
                        id="project-customer"
                        class="form__input"
                        prop:value=move || vm.form.get().customer_name
                        on:input=move |ev| {
                            vm.form.update(|f| f.customer_name = event_target_value(&ev))
                        }
                    />
                </div>
                <div class="form__field">
                    <label class="form__label" for="project-modules">"Modules"</label>
                    <input
                        id="project-modules"
                        class="form__input"
                        placeholder="FI, SD, MM"
                        prop:value=move || vm.form.get().modules
                        on:input=move |ev| vm.form.update(|f| f.modules = event_target_value(&ev))
                    />
                </div>
            </div>
        </div>
    }
}
