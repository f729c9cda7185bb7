use crate::shared::api_utils::api_url;
use contracts::dashboards::d400_overview::OverviewStats;
use gloo_net::http::Request;

/// Fetch overview stats, scoped to a project when one is selected.
pub async fn get_overview_stats(project_id: Option<&str>) -> Result<OverviewStats, String> {
    let mut url = api_url("/api/dashboard/stats");
    if let Some(id) = project_id {
        url = format!("{}?project_id={}", url, urlencoding::encode(id));
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
