use crate::shared::api_utils::api_url;
use contracts::domain::a003_analysis_session::aggregate::{
    AnalysisSession, QuestionDto, SessionDto, SessionQuestion,
};
use gloo_net::http::Request;

/// Fetch the sessions of one project.
pub async fn fetch_sessions(project_id: &str) -> Result<Vec<AnalysisSession>, String> {
    let url = format!(
        "{}?project_id={}",
        api_url("/api/sessions"),
        urlencoding::encode(project_id)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one session by id.
pub async fn fetch_session(id: &str) -> Result<AnalysisSession, String> {
    let url = format!("{}/{}", api_url("/api/sessions"), id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a session.
pub async fn create_session(dto: &SessionDto) -> Result<AnalysisSession, String> {
    let response = Request::post(&api_url("/api/sessions"))
        .json(dto)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the questions of a session.
pub async fn fetch_questions(session_id: &str) -> Result<Vec<SessionQuestion>, String> {
    let url = format!(
        "{}?session_id={}",
        api_url("/api/questions"),
        urlencoding::encode(session_id)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Add a question to a session.
pub async fn create_question(dto: &QuestionDto) -> Result<SessionQuestion, String> {
    let response = Request::post(&api_url("/api/questions"))
        .json(dto)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
