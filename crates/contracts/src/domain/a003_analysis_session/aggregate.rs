use crate::domain::a001_project::aggregate::ProjectId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор сессии анализа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisSessionId(pub Uuid);

impl AnalysisSessionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for AnalysisSessionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AnalysisSessionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Planned,
    InProgress,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Planned => "Planned",
            SessionStatus::InProgress => "InProgress",
            SessionStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "Planned" => Ok(SessionStatus::Planned),
            "InProgress" => Ok(SessionStatus::InProgress),
            "Completed" => Ok(SessionStatus::Completed),
            _ => Err(format!("Unknown session status: {}", s)),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Workshop/analysis session held with the customer for one process area.
/// `base.description` is the session name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSession {
    #[serde(flatten)]
    pub base: BaseAggregate<AnalysisSessionId>,

    pub project_id: ProjectId,
    pub module: String,
    pub process_name: String,
    pub status: SessionStatus,
}

impl AnalysisSession {
    pub fn new_for_insert(
        project_id: ProjectId,
        code: String,
        name: String,
        module: String,
        process_name: String,
    ) -> Self {
        let base = BaseAggregate::new(AnalysisSessionId::new_v4(), code, name);
        Self {
            base,
            project_id,
            module,
            process_name,
            status: SessionStatus::Planned,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Session name must not be empty".into());
        }
        if self.module.trim().is_empty() {
            return Err("Module must not be empty".into());
        }
        Ok(())
    }
}

impl AggregateRoot for AnalysisSession {
    type Id = AnalysisSessionId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "analysis_session"
    }

    fn element_name() -> &'static str {
        "Analysis session"
    }

    fn list_name() -> &'static str {
        "Analysis sessions"
    }
}

// ============================================================================
// Child entities
// ============================================================================

/// Open question raised during a session. Not an aggregate of its own: always
/// fetched and saved through its parent session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionQuestion {
    pub id: Uuid,
    pub session_id: AnalysisSessionId,
    pub question_text: String,
    pub answer_text: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl SessionQuestion {
    pub fn new(session_id: AnalysisSessionId, question_text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id,
            question_text,
            answer_text: None,
            created_at: chrono::Utc::now(),
        }
    }

    pub fn is_answered(&self) -> bool {
        self.answer_text
            .as_deref()
            .map(|a| !a.trim().is_empty())
            .unwrap_or(false)
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Форма создания сессии анализа (client -> server)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionDto {
    pub id: Option<String>,
    pub project_id: String,
    pub session_name: String,
    pub module: String,
    pub process_name: String,
}

/// Форма добавления вопроса (client -> server)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionDto {
    pub session_id: String,
    pub question_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_answered_only_with_text() {
        let mut q = SessionQuestion::new(AnalysisSessionId::new_v4(), "Which ledgers?".into());
        assert!(!q.is_answered());
        q.answer_text = Some("  ".into());
        assert!(!q.is_answered());
        q.answer_text = Some("0L and 2L".into());
        assert!(q.is_answered());
    }
}
