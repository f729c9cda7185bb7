use crate::domain::a003_analysis_session::api::{
    create_question, fetch_questions, fetch_session,
};
use crate::domain::a003_analysis_session::ui::list::status_variant;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use contracts::domain::a003_analysis_session::aggregate::{
    AnalysisSession, QuestionDto, SessionQuestion,
};
use leptos::prelude::*;
use std::rc::Rc;

/// Session details: header info plus the list of open questions.
#[component]
#[allow(non_snake_case)]
pub fn SessionDetails(id: String, on_close: Rc<dyn Fn(())>) -> impl IntoView {
    let session = RwSignal::new(None::<AnalysisSession>);
    let questions = RwSignal::new(Vec::<SessionQuestion>::new());
    let error = RwSignal::new(None::<String>);
    let new_question = RwSignal::new(String::new());
    let session_id = id.clone();

    let load_questions = {
        let session_id = session_id.clone();
        move || {
            let session_id = session_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_questions(&session_id).await {
                    Ok(list) => {
                        questions.set(list);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    };

    // Load session and questions
    Effect::new({
        let session_id = session_id.clone();
        let load_questions = load_questions.clone();
        move |_| {
            let session_id = session_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_session(&session_id).await {
                    Ok(s) => session.set(Some(s)),
                    Err(e) => error.set(Some(e)),
                }
            });
            load_questions();
        }
    });

    let handle_add_question = {
        let session_id = session_id.clone();
        let load_questions = load_questions.clone();
        move |_| {
            let text = new_question.get_untracked();
            if text.trim().is_empty() {
                return;
            }
            new_question.set(String::new());
            let dto = QuestionDto {
                session_id: session_id.clone(),
                question_text: text.trim().to_string(),
            };
            let load_questions = load_questions.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match create_question(&dto).await {
                    Ok(_) => load_questions(),
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    };
    let handle_close = move |_| (on_close)(());

    view! {
        <div class="details">
            <div class="details__header">
                <h2 class="details__title">
                    {move || {
                        session
                            .get()
                            .map(|s| s.base.description.clone())
                            .unwrap_or_else(|| "Loading...".to_string())
                    }}
                </h2>
                <div class="details__actions">
                    <button class="button button--secondary" on:click=handle_close>
                        {icon("x")}
                        "Close"
                    </button>
                </div>
            </div>

            {move || session.get().map(|s| view! {
                <div class="details__meta">
                    <Badge variant="primary".to_string() text=s.module.clone() />
                    <span class="details__meta-item">{s.process_name.clone()}</span>
                    <Badge
                        variant=status_variant(s.status).to_string()
                        text=s.status.as_str().to_string()
                    />
                </div>
            })}

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <h3 class="details__section-title">
                {move || format!("Questions ({})", questions.get().len())}
            </h3>

            <div class="question-list">
                {move || {
                    let list = questions.get();
                    if list.is_empty() {
                        view! {
                            <div class="question-list__empty">"No questions yet."</div>
                        }.into_any()
                    } else {
                        list.into_iter().enumerate().map(|(i, q)| {
                            let answered = q.is_answered();
                            view! {
                                <div class="question-card">
                                    <strong class="question-card__title">
                                        {format!("Q{}: {}", i + 1, q.question_text)}
                                    </strong>
                                    <div
                                        class="question-card__answer"
                                        class:question-card__answer--open=!answered
                                    >
                                        {match q.answer_text.clone() {
                                            Some(a) if answered => a,
                                            _ => "Not answered yet".to_string(),
                                        }}
                                    </div>
                                </div>
                            }
                        }).collect_view().into_any()
                    }
                }}
            </div>

            <div class="question-form">
                <input
                    class="form__input"
                    aria-label="New question"
                    placeholder="Add a question..."
                    prop:value=move || new_question.get()
                    on:input=move |ev| new_question.set(event_target_value(&ev))
                />
                <button class="button button--primary" on:click=handle_add_question>
                    {icon("plus")}
                    "Add Question"
                </button>
            </div>
        </div>
    }
}
