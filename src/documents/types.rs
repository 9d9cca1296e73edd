use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle tag on an onboarding document.
///
/// Upload moves Pending -> Uploaded (reversible via remove), validation moves
/// Pending -> Approved/Rejected and is never reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Uploaded,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Uploaded => "uploaded",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form details attached to a document by reviewers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub employee_name: Option<String>,
    pub upload_date: Option<NaiveDate>,
    pub file_type: Option<String>,
    pub file_url: Option<String>,
}

/// A single uploadable/verifiable artifact tied to an onboarding case.
///
/// Owned exclusively by the enclosing workflow; mutated only through its
/// transition operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub name: String,
    pub status: DocumentStatus,
    pub comment: Option<String>,
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

impl DocumentRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: DocumentStatus::Pending,
            comment: None,
            metadata: DocumentMetadata::default(),
        }
    }
}

/// The fixed checklist every onboarding case starts from.
pub fn seed_documents() -> Vec<DocumentRecord> {
    vec![
        DocumentRecord::new("1", "Aadhaar Card"),
        DocumentRecord::new("2", "PAN Card"),
        DocumentRecord::new("3", "Educational Certificates"),
        DocumentRecord::new("4", "Previous Employment Certificate"),
        DocumentRecord::new("5", "Bank Account Details"),
    ]
}

/// Metadata fields a reviewer may update on any document without touching its
/// status. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentEdit {
    pub name: Option<String>,
    pub employee_name: Option<String>,
    pub upload_date: Option<NaiveDate>,
    pub file_type: Option<String>,
    pub comment: Option<String>,
}

/// Errors surfaced by document transition operations
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document {id} not found")]
    UnknownDocument { id: String },

    #[error("cannot {action} document {id} while {from}")]
    InvalidTransition {
        id: String,
        from: DocumentStatus,
        action: &'static str,
    },

    #[error("validation incomplete: {pending} pending, {rejected} rejected")]
    ValidationIncomplete { pending: usize, rejected: usize },
}

/// Audit entry recorded for every status change.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionRecord {
    pub document_id: String,
    pub from: DocumentStatus,
    pub to: DocumentStatus,
    pub action: &'static str,
    pub timestamp: DateTime<Utc>,
}
