use serde::{Deserialize, Serialize};

/// Response for the start-page overview dashboard.
///
/// Counters are project-scoped when the request carried a `project_id`
/// query parameter, otherwise they cover the whole workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_projects: u64,
    pub total_sessions: u64,
    pub total_questions: u64,
    pub total_gaps: u64,
    /// Display name of the scoped project, None for workspace-wide stats
    pub project_name: Option<String>,
    /// Status of the scoped project ("Active", "Planning", ...)
    pub project_status: Option<String>,
    pub recent_activities: Vec<RecentActivity>,
}

/// One row of the "recent activities" table: a recently touched
/// analysis session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentActivity {
    /// Session id, string form
    pub id: String,
    pub session_name: String,
    pub module: Option<String>,
    pub status: String,
    /// ISO datetime string as sent by the backend
    pub created_at: Option<String>,
}
