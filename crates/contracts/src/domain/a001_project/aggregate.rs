use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор проекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
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

impl AggregateId for ProjectId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjectId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Lifecycle status of an implementation project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Closed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "OnHold",
            ProjectStatus::Closed => "Closed",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "Planning" => Ok(ProjectStatus::Planning),
            "Active" => Ok(ProjectStatus::Active),
            "OnHold" => Ok(ProjectStatus::OnHold),
            "Closed" => Ok(ProjectStatus::Closed),
            _ => Err(format!("Unknown project status: {}", s)),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Implementation project. `base.code` is the short project code shown in the
/// header selector, `base.description` is the display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub base: BaseAggregate<ProjectId>,

    pub customer_name: String,
    /// Comma-separated list of functional modules covered by the project
    pub modules: String,
    pub status: ProjectStatus,
    pub phase: Option<String>,
}

impl Project {
    pub fn new_for_insert(
        code: String,
        description: String,
        customer_name: String,
        modules: String,
    ) -> Self {
        let base = BaseAggregate::new(ProjectId::new_v4(), code, description);
        Self {
            base,
            customer_name,
            modules,
            status: ProjectStatus::Planning,
            phase: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Project code must not be empty".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Project name must not be empty".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Project {
    type Id = ProjectId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "project"
    }

    fn element_name() -> &'static str {
        "Project"
    }

    fn list_name() -> &'static str {
        "Projects"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Форма создания/редактирования проекта (client -> server)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub customer_name: String,
    pub modules: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["Planning", "Active", "OnHold", "Closed"] {
            assert_eq!(ProjectStatus::parse(s).unwrap().as_str(), s);
        }
        assert!(ProjectStatus::parse("Archived").is_err());
    }

    #[test]
    fn test_validate_rejects_blank_code() {
        let p = Project::new_for_insert(
            "  ".into(),
            "S/4 Rollout".into(),
            "ACME".into(),
            "FI,SD".into(),
        );
        assert!(p.validate().is_err());
    }
}
