use crate::domain::a004_design_document::api::fetch_documents;
use crate::domain::a005_test_case::api::{create_test_case, fetch_test_cases};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::remote::{Remote, RequestSeq};
use crate::shared::toast::ToastService;
use contracts::domain::a005_test_case::aggregate::{TestCase, TestCaseDto, TestCaseStatus};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct TestCaseRow {
    pub id: String,
    pub code: String,
    pub title: String,
    pub document_code: String,
    pub test_type: String,
    pub status: TestCaseStatus,
}

impl From<TestCase> for TestCaseRow {
    fn from(t: TestCase) -> Self {
        Self {
            id: t.base.id.as_string(),
            code: t.base.code,
            title: t.base.description,
            document_code: t.document_code,
            test_type: t.test_type.as_str().to_string(),
            status: t.status,
        }
    }
}

fn status_variant(status: TestCaseStatus) -> &'static str {
    match status {
        TestCaseStatus::Passed => "success",
        TestCaseStatus::Failed => "error",
        TestCaseStatus::Blocked => "warning",
        TestCaseStatus::Ready => "primary",
        TestCaseStatus::Draft => "neutral",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TestCaseList() -> impl IntoView {
    let (state, set_state) = signal::<Remote<Vec<TestCaseRow>>>(Remote::Idle);
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
            let result = fetch_test_cases(&project_id).await;
            if !requests.with_value(|s| s.is_current(token)) {
                return;
            }
            match result {
                Ok(v) => {
                    set_state.set(Remote::Ready(v.into_iter().map(Into::into).collect()));
                }
                Err(e) => {
                    log::warn!("test case list load failed: {}", e);
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
            Some("test-case-create-modal".to_string()),
            move |handle| {
                let on_saved = Rc::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        toasts.show("Test case created!");
                        fetch();
                    }
                });
                let on_cancel = Rc::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });

                view! {
                    <NewTestCaseDialog
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
                    <h1 class="header__title">"Test Cases"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        aria-haspopup="dialog"
                        on:click=move |_| open_create_modal()
                    >
                        {icon("plus")}
                        "New Test Case"
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
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Document"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Status"</th>
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
                                    "No test cases yet."
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
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell"><b>{row.code.clone()}</b></td>
                                            <td class="table__cell">{row.title.clone()}</td>
                                            <td class="table__cell">{row.document_code.clone()}</td>
                                            <td class="table__cell">
                                                <Badge
                                                    variant="primary".to_string()
                                                    text=row.test_type.clone()
                                                />
                                            </td>
                                            <td class="table__cell">
                                                <Badge
                                                    variant=status_variant(status).to_string()
                                                    text=status.as_str().to_string()
                                                />
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

/// Test case creation form. The document dropdown is fetched when the
/// dialog opens.
#[component]
#[allow(non_snake_case)]
fn NewTestCaseDialog(
    project_id: String,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let form = RwSignal::new(TestCaseDto {
        project_id: project_id.clone(),
        test_type: "Unit".to_string(),
        ..TestCaseDto::default()
    });
    let document_options = RwSignal::new(Vec::<(String, String)>::new());
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    Effect::new({
        let project_id = project_id.clone();
        move |_| {
            let project_id = project_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_documents(&project_id).await {
                    Ok(list) => {
                        document_options.set(
                            list.into_iter()
                                .map(|d| (d.base.id.as_string(), d.base.code))
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
            if current.document_id.is_empty() {
                error.set(Some("Select an FS/TS document".to_string()));
                return;
            }
            if current.title.trim().is_empty() {
                error.set(Some("Title is required".to_string()));
                return;
            }
            let on_saved = on_saved.clone();
            is_saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match create_test_case(&current).await {
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
                <h2 class="details__title">"New Test Case"</h2>
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
                    <label class="form__label" for="tc-document">"FS/TS Document *"</label>
                    <select
                        id="tc-document"
                        class="form__input"
                        prop:value=move || form.get().document_id
                        on:change=move |ev| {
                            form.update(|f| f.document_id = event_target_value(&ev))
                        }
                    >
                        <option value="">"-- Select FS/TS Document --"</option>
                        <For
                            each=move || document_options.get()
                            key=|(id, _)| id.clone()
                            let:option
                        >
                            <option value=option.0.clone()>{option.1.clone()}</option>
                        </For>
                    </select>
                </div>
                <div class="form__field">
                    <label class="form__label" for="tc-code">"Code"</label>
                    <input
                        id="tc-code"
                        class="form__input"
                        placeholder="TC-0001"
                        prop:value=move || form.get().code
                        on:input=move |ev| form.update(|f| f.code = event_target_value(&ev))
                    />
                </div>
                <div class="form__field">
                    <label class="form__label" for="tc-title">"Title *"</label>
                    <input
                        id="tc-title"
                        class="form__input"
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>
                <div class="form__field">
                    <label class="form__label" for="tc-type">"Test Type"</label>
                    <select
                        id="tc-type"
                        class="form__input"
                        prop:value=move || form.get().test_type
                        on:change=move |ev| {
                            form.update(|f| f.test_type = event_target_value(&ev))
                        }
                    >
                        <option value="Unit">"Unit"</option>
                        <option value="SIT">"SIT"</option>
                        <option value="UAT">"UAT"</option>
                        <option value="Regression">"Regression"</option>
                    </select>
                </div>
            </div>
        </div>
    }
}
