use crate::domain::a001_project::aggregate::ProjectId;
use crate::domain::a004_design_document::aggregate::DesignDocumentId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор тест-кейса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestCaseId(pub Uuid);

impl TestCaseId {
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

impl AggregateId for TestCaseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TestCaseId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestType {
    Unit,
    Sit,
    Uat,
    Regression,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Unit => "Unit",
            TestType::Sit => "SIT",
            TestType::Uat => "UAT",
            TestType::Regression => "Regression",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "Unit" => Ok(TestType::Unit),
            "SIT" => Ok(TestType::Sit),
            "UAT" => Ok(TestType::Uat),
            "Regression" => Ok(TestType::Regression),
            _ => Err(format!("Unknown test type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestCaseStatus {
    Draft,
    Ready,
    Passed,
    Failed,
    Blocked,
}

impl TestCaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestCaseStatus::Draft => "Draft",
            TestCaseStatus::Ready => "Ready",
            TestCaseStatus::Passed => "Passed",
            TestCaseStatus::Failed => "Failed",
            TestCaseStatus::Blocked => "Blocked",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Test case derived from an FS/TS document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(flatten)]
    pub base: BaseAggregate<TestCaseId>,

    pub project_id: ProjectId,
    pub document_id: DesignDocumentId,
    /// Denormalized document code for list rendering
    pub document_code: String,
    pub test_type: TestType,
    pub status: TestCaseStatus,
}

impl TestCase {
    pub fn new_for_insert(
        project_id: ProjectId,
        document_id: DesignDocumentId,
        document_code: String,
        code: String,
        title: String,
        test_type: TestType,
    ) -> Self {
        let base = BaseAggregate::new(TestCaseId::new_v4(), code, title);
        Self {
            base,
            project_id,
            document_id,
            document_code,
            test_type,
            status: TestCaseStatus::Draft,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Test case title must not be empty".into());
        }
        Ok(())
    }
}

impl AggregateRoot for TestCase {
    type Id = TestCaseId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "test_case"
    }

    fn element_name() -> &'static str {
        "Test case"
    }

    fn list_name() -> &'static str {
        "Test cases"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Форма создания тест-кейса (client -> server)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestCaseDto {
    pub id: Option<String>,
    pub project_id: String,
    pub document_id: String,
    pub code: String,
    pub title: String,
    pub test_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_type_round_trip() {
        for s in ["Unit", "SIT", "UAT", "Regression"] {
            assert_eq!(TestType::parse(s).unwrap().as_str(), s);
        }
        assert!(TestType::parse("Smoke").is_err());
    }
}
