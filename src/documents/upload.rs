use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::types::{
    seed_documents, DocumentError, DocumentRecord, DocumentStatus, TransitionRecord,
};

/// Result of the file-picker primitive. The workflow layer only learns that a
/// file was chosen and what it was called, never the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSelection {
    pub file_name: String,
}

impl FileSelection {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

/// Upload step of the onboarding wizard: tracks which checklist documents
/// have a file attached and gates the continue action on all of them.
#[derive(Debug)]
pub struct UploadGate {
    documents: Vec<DocumentRecord>,
    history: Vec<TransitionRecord>,
}

impl Default for UploadGate {
    fn default() -> Self {
        Self::new(seed_documents())
    }
}

impl UploadGate {
    pub fn new(documents: Vec<DocumentRecord>) -> Self {
        Self {
            documents,
            history: Vec::new(),
        }
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    /// Attach a file to a pending document, moving it to Uploaded.
    ///
    /// An absent selection means the picker was dismissed: nothing happens.
    /// Uploading a document that is not pending is also ignored, matching the
    /// one-directional transition rule.
    pub fn upload(
        &mut self,
        id: &str,
        selection: Option<&FileSelection>,
    ) -> Result<(), DocumentError> {
        let Some(selection) = selection else {
            debug!(document_id = %id, "no file selected, upload skipped");
            return Ok(());
        };

        let doc = self.find_mut(id)?;
        if doc.status != DocumentStatus::Pending {
            debug!(
                document_id = %id,
                status = %doc.status,
                "upload ignored for non-pending document"
            );
            return Ok(());
        }

        let from = doc.status;
        doc.status = DocumentStatus::Uploaded;
        info!(
            document_id = %id,
            document = %doc.name,
            file_name = %selection.file_name,
            "document uploaded"
        );
        self.record(id, from, DocumentStatus::Uploaded, "upload");
        Ok(())
    }

    /// Detach an uploaded file, returning the document to Pending. The only
    /// reverse transition the lifecycle allows.
    pub fn remove(&mut self, id: &str) -> Result<(), DocumentError> {
        let doc = self.find_mut(id)?;
        if doc.status != DocumentStatus::Uploaded {
            debug!(
                document_id = %id,
                status = %doc.status,
                "remove ignored for non-uploaded document"
            );
            return Ok(());
        }

        let from = doc.status;
        doc.status = DocumentStatus::Pending;
        info!(document_id = %id, document = %doc.name, "upload removed");
        self.record(id, from, DocumentStatus::Pending, "remove");
        Ok(())
    }

    /// Continue is enabled only once every document carries a file or has
    /// already passed verification.
    pub fn all_uploaded(&self) -> bool {
        self.documents.iter().all(|doc| {
            matches!(
                doc.status,
                DocumentStatus::Uploaded | DocumentStatus::Approved
            )
        })
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut DocumentRecord, DocumentError> {
        self.documents
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or_else(|| DocumentError::UnknownDocument { id: id.to_string() })
    }

    fn record(&mut self, id: &str, from: DocumentStatus, to: DocumentStatus, action: &'static str) {
        self.history.push(TransitionRecord {
            document_id: id.to_string(),
            from,
            to,
            action,
            timestamp: Utc::now(),
        });
    }
}
