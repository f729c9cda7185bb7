use crate::shared::api_utils::api_url;
use contracts::domain::a004_design_document::aggregate::{DesignDocument, DocumentDto};
use gloo_net::http::Request;

/// Fetch the design documents of one project.
pub async fn fetch_documents(project_id: &str) -> Result<Vec<DesignDocument>, String> {
    let url = format!(
        "{}?project_id={}",
        api_url("/api/documents"),
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

/// Fetch one document by id.
pub async fn fetch_document(id: &str) -> Result<DesignDocument, String> {
    let url = format!("{}/{}", api_url("/api/documents"), id);

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

/// Create a document.
pub async fn create_document(dto: &DocumentDto) -> Result<DesignDocument, String> {
    let response = Request::post(&api_url("/api/documents"))
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
