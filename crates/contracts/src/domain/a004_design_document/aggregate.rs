use crate::domain::a001_project::aggregate::ProjectId;
use crate::domain::a002_requirement::aggregate::RequirementId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор проектного документа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesignDocumentId(pub Uuid);

impl DesignDocumentId {
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

impl AggregateId for DesignDocumentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DesignDocumentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Functional specification or technical specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Fs,
    Ts,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Fs => "FS",
            DocumentType::Ts => "TS",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "FS" => Ok(DocumentType::Fs),
            "TS" => Ok(DocumentType::Ts),
            _ => Err(format!("Unknown document type: {}", s)),
        }
    }
}

/// How `content` must be rendered. `RichText` bodies come from the AI
/// generation pipeline and pass through the sanitizer before display;
/// everything else is plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentFormat {
    PlainText,
    RichText,
}

impl ContentFormat {
    pub fn is_rich(&self) -> bool {
        matches!(self, ContentFormat::RichText)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Draft,
    InReview,
    Approved,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::InReview => "InReview",
            DocumentStatus::Approved => "Approved",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// FS/TS design document attached to a requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignDocument {
    #[serde(flatten)]
    pub base: BaseAggregate<DesignDocumentId>,

    pub project_id: ProjectId,
    pub requirement_id: RequirementId,
    /// Denormalized requirement code for list rendering
    pub requirement_code: String,
    pub document_type: DocumentType,
    pub content: String,
    pub content_format: ContentFormat,
    pub status: DocumentStatus,
}

impl DesignDocument {
    pub fn new_for_insert(
        project_id: ProjectId,
        requirement_id: RequirementId,
        requirement_code: String,
        document_type: DocumentType,
    ) -> Self {
        let code = format!("{}-{}", document_type.as_str(), requirement_code);
        let base = BaseAggregate::new(DesignDocumentId::new_v4(), code.clone(), code);
        Self {
            base,
            project_id,
            requirement_id,
            requirement_code,
            document_type,
            content: String::new(),
            content_format: ContentFormat::PlainText,
            status: DocumentStatus::Draft,
        }
    }
}

impl AggregateRoot for DesignDocument {
    type Id = DesignDocumentId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "design_document"
    }

    fn element_name() -> &'static str {
        "Design document"
    }

    fn list_name() -> &'static str {
        "Design documents"
    }
}

// ============================================================================
// Doc Co-Pilot chat
// ============================================================================

/// Роль сообщения в чате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One line of the document co-pilot conversation. Client-side only for now:
/// the transcript is append-only and `content` is opaque text, never markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
}

impl DocChatMessage {
    pub fn user(content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::User,
            content,
        }
    }

    pub fn assistant(content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::Assistant,
            content,
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Форма создания документа (client -> server)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentDto {
    pub id: Option<String>,
    pub project_id: String,
    pub requirement_id: String,
    pub document_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_round_trip() {
        assert_eq!(DocumentType::parse("FS").unwrap().as_str(), "FS");
        assert_eq!(DocumentType::parse("TS").unwrap().as_str(), "TS");
        assert!(DocumentType::parse("fs").is_err());
    }

    #[test]
    fn test_new_document_code_includes_requirement() {
        let doc = DesignDocument::new_for_insert(
            ProjectId::new_v4(),
            RequirementId::new_v4(),
            "REQ-FI-0042".into(),
            DocumentType::Fs,
        );
        assert_eq!(doc.base.code, "FS-REQ-FI-0042");
        assert!(!doc.content_format.is_rich());
    }
}
