use crate::domain::a001_project::aggregate::ProjectId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор требования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementId(pub Uuid);

impl RequirementId {
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

impl AggregateId for RequirementId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RequirementId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementStatus {
    Draft,
    InReview,
    Ready,
}

impl RequirementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementStatus::Draft => "Draft",
            RequirementStatus::InReview => "InReview",
            RequirementStatus::Ready => "Ready",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "Draft" => Ok(RequirementStatus::Draft),
            "InReview" => Ok(RequirementStatus::InReview),
            "Ready" => Ok(RequirementStatus::Ready),
            _ => Err(format!("Unknown requirement status: {}", s)),
        }
    }
}

/// Fit-Gap classification of a requirement against the standard product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Fit,
    PartialFit,
    Gap,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Fit => "Fit",
            Classification::PartialFit => "PartialFit",
            Classification::Gap => "Gap",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "Fit" => Ok(Classification::Fit),
            "PartialFit" => Ok(Classification::PartialFit),
            "Gap" => Ok(Classification::Gap),
            _ => Err(format!("Unknown classification: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "Low" => Ok(Complexity::Low),
            "Medium" => Ok(Complexity::Medium),
            "High" => Ok(Complexity::High),
            _ => Err(format!("Unknown complexity: {}", s)),
        }
    }
}

/// How much AI-generated design material exists for the requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiCoverage {
    None,
    Partial,
    Full,
}

impl AiCoverage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiCoverage::None => "None",
            AiCoverage::Partial => "Partial",
            AiCoverage::Full => "Full",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Functional requirement. `base.code` is the requirement code ("REQ-FI-0042"),
/// `base.description` is the title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(flatten)]
    pub base: BaseAggregate<RequirementId>,

    pub project_id: ProjectId,
    /// Functional module the requirement belongs to ("FI", "SD", ...)
    pub module: String,
    pub complexity: Complexity,
    pub status: RequirementStatus,
    pub classification: Classification,
    pub ai_coverage: AiCoverage,
}

impl Requirement {
    pub fn new_for_insert(
        project_id: ProjectId,
        code: String,
        title: String,
        module: String,
        complexity: Complexity,
    ) -> Self {
        let base = BaseAggregate::new(RequirementId::new_v4(), code, title);
        Self {
            base,
            project_id,
            module,
            complexity,
            status: RequirementStatus::Draft,
            classification: Classification::Fit,
            ai_coverage: AiCoverage::None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Requirement code must not be empty".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Requirement title must not be empty".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Requirement {
    type Id = RequirementId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "requirement"
    }

    fn element_name() -> &'static str {
        "Requirement"
    }

    fn list_name() -> &'static str {
        "Requirements"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Форма создания требования (client -> server)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequirementDto {
    pub id: Option<String>,
    pub project_id: String,
    pub code: String,
    pub title: String,
    pub module: String,
    pub complexity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_round_trip() {
        for s in ["Fit", "PartialFit", "Gap"] {
            assert_eq!(Classification::parse(s).unwrap().as_str(), s);
        }
        assert!(Classification::parse("fit").is_err());
    }

    #[test]
    fn test_complexity_round_trip() {
        for s in ["Low", "Medium", "High"] {
            assert_eq!(Complexity::parse(s).unwrap().as_str(), s);
        }
    }
}
