use crate::shared::api_utils::api_url;
use contracts::domain::a005_test_case::aggregate::{TestCase, TestCaseDto};
use gloo_net::http::Request;

/// Fetch the test cases of one project.
pub async fn fetch_test_cases(project_id: &str) -> Result<Vec<TestCase>, String> {
    let url = format!(
        "{}?project_id={}",
        api_url("/api/testcases"),
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

/// Create a test case.
pub async fn create_test_case(dto: &TestCaseDto) -> Result<TestCase, String> {
    let response = Request::post(&api_url("/api/testcases"))
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
