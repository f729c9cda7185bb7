use crate::shared::api_utils::api_url;
use contracts::domain::a002_requirement::aggregate::{Requirement, RequirementDto};
use gloo_net::http::Request;

/// Fetch requirements, scoped to a project and narrowed by the list filter.
/// Empty filter fields are left out of the query string.
pub async fn fetch_requirements(
    project_id: Option<&str>,
    module: &str,
    status: &str,
    search: &str,
) -> Result<Vec<Requirement>, String> {
    let mut params: Vec<String> = Vec::new();
    if let Some(id) = project_id {
        params.push(format!("project_id={}", urlencoding::encode(id)));
    }
    if !module.is_empty() {
        params.push(format!("module={}", urlencoding::encode(module)));
    }
    if !status.is_empty() {
        params.push(format!("status={}", urlencoding::encode(status)));
    }
    if !search.trim().is_empty() {
        params.push(format!("search={}", urlencoding::encode(search.trim())));
    }

    let mut url = api_url("/api/requirements");
    if !params.is_empty() {
        url = format!("{}?{}", url, params.join("&"));
    }

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

/// Create a requirement.
pub async fn create_requirement(dto: &RequirementDto) -> Result<Requirement, String> {
    let url = api_url("/api/requirements");

    let response = Request::post(&url)
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
