use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::notify::{Notification, Notifier};
use crate::routing::{Navigator, DASHBOARD_ROUTE};

use super::types::{
    seed_documents, DocumentEdit, DocumentError, DocumentRecord, DocumentStatus, TransitionRecord,
};

const COMPLETION_TOAST: Duration = Duration::from_secs(5);

/// Reviewer-side workflow over an employee's submitted documents.
///
/// Approve and reject act only on pending documents and are never reversed;
/// completion is gated on every document being approved.
pub struct ValidationWorkflow {
    documents: Vec<DocumentRecord>,
    select_all_pending: bool,
    history: Vec<TransitionRecord>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ValidationWorkflow {
    pub fn new(
        documents: Vec<DocumentRecord>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            documents,
            select_all_pending: false,
            history: Vec::new(),
            notifier,
            navigator,
        }
    }

    pub fn with_seed_documents(notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
        Self::new(seed_documents(), notifier, navigator)
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    pub fn pending_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|doc| doc.status == DocumentStatus::Pending)
            .count()
    }

    /// Mark a pending document as approved and clear any rejection comment.
    pub fn approve(&mut self, id: &str) -> Result<(), DocumentError> {
        let doc = find_mut(&mut self.documents, id)?;
        if doc.status != DocumentStatus::Pending {
            return Err(DocumentError::InvalidTransition {
                id: id.to_string(),
                from: doc.status,
                action: "approve",
            });
        }

        doc.status = DocumentStatus::Approved;
        doc.comment = None;
        let name = doc.name.clone();
        info!(document_id = %id, document = %name, "document approved");
        self.record(id, DocumentStatus::Pending, DocumentStatus::Approved, "approve");

        self.notifier.notify(Notification::success(
            format!("Document {name} approved"),
            "Document has passed verification",
        ));
        Ok(())
    }

    /// Mark a pending document as rejected, keeping the reviewer's comment.
    /// An empty comment is stored as-is; the notification falls back to a
    /// generic message.
    pub fn reject(&mut self, id: &str, comment: &str) -> Result<(), DocumentError> {
        let doc = find_mut(&mut self.documents, id)?;
        if doc.status != DocumentStatus::Pending {
            return Err(DocumentError::InvalidTransition {
                id: id.to_string(),
                from: doc.status,
                action: "reject",
            });
        }

        doc.status = DocumentStatus::Rejected;
        doc.comment = Some(comment.to_string());
        let name = doc.name.clone();
        warn!(document_id = %id, document = %name, comment = %comment, "document rejected");
        self.record(id, DocumentStatus::Pending, DocumentStatus::Rejected, "reject");

        let description = if comment.is_empty() {
            "Document has been rejected".to_string()
        } else {
            comment.to_string()
        };
        self.notifier
            .notify(Notification::error(format!("Document {name} rejected"), description));
        Ok(())
    }

    /// Approve every currently pending document in one batch. Complete no-op
    /// when nothing is pending: no transitions, no notification.
    pub fn bulk_approve(&mut self) -> usize {
        let mut approved: Vec<String> = Vec::new();
        for doc in self
            .documents
            .iter_mut()
            .filter(|doc| doc.status == DocumentStatus::Pending)
        {
            doc.status = DocumentStatus::Approved;
            doc.comment = None;
            approved.push(doc.id.clone());
        }
        if approved.is_empty() {
            debug!("bulk approve skipped, no pending documents");
            return 0;
        }

        for id in &approved {
            self.history.push(TransitionRecord {
                document_id: id.clone(),
                from: DocumentStatus::Pending,
                to: DocumentStatus::Approved,
                action: "bulk-approve",
                timestamp: Utc::now(),
            });
        }

        let count = approved.len();
        info!(count, "bulk approved pending documents");
        self.notifier.notify(Notification::success(
            format!("{count} documents approved"),
            "All pending documents have been approved",
        ));
        count
    }

    /// Free-form metadata update, allowed on any document regardless of
    /// status. Never changes status.
    pub fn edit(&mut self, id: &str, edit: DocumentEdit) -> Result<(), DocumentError> {
        let doc = find_mut(&mut self.documents, id)?;
        if let Some(name) = edit.name {
            doc.name = name;
        }
        if let Some(employee_name) = edit.employee_name {
            doc.metadata.employee_name = Some(employee_name);
        }
        if let Some(upload_date) = edit.upload_date {
            doc.metadata.upload_date = Some(upload_date);
        }
        if let Some(file_type) = edit.file_type {
            doc.metadata.file_type = Some(file_type);
        }
        if let Some(comment) = edit.comment {
            doc.comment = Some(comment);
        }
        debug!(document_id = %id, "document metadata edited");
        Ok(())
    }

    /// True once every document has been approved or rejected.
    pub fn is_all_validated(&self) -> bool {
        self.documents.iter().all(|doc| {
            matches!(
                doc.status,
                DocumentStatus::Approved | DocumentStatus::Rejected
            )
        })
    }

    /// True only when every document has been approved.
    pub fn can_complete(&self) -> bool {
        self.documents
            .iter()
            .all(|doc| doc.status == DocumentStatus::Approved)
    }

    pub fn select_all_pending(&self) -> bool {
        self.select_all_pending
    }

    /// Toggle the select-all-pending checkbox. Checking it only sticks while
    /// at least one pending document exists.
    pub fn set_select_all_pending(&mut self, checked: bool) {
        if checked {
            if self.pending_count() > 0 {
                self.select_all_pending = true;
            }
        } else {
            self.select_all_pending = false;
        }
    }

    /// Unchecking any row's individual checkbox clears the select-all toggle.
    pub fn uncheck_row(&mut self) {
        self.select_all_pending = false;
    }

    /// Finish validation. Accepted only when every document is approved;
    /// notifies and returns to the dashboard on success.
    pub fn complete(&mut self) -> Result<(), DocumentError> {
        if !self.can_complete() {
            let rejected = self
                .documents
                .iter()
                .filter(|doc| doc.status == DocumentStatus::Rejected)
                .count();
            return Err(DocumentError::ValidationIncomplete {
                pending: self.pending_count(),
                rejected,
            });
        }

        info!("document validation completed");
        self.notifier.notify(
            Notification::success(
                "Document validation completed successfully!",
                "All documents have been approved and verified.",
            )
            .with_duration(COMPLETION_TOAST),
        );
        self.navigator.navigate(DASHBOARD_ROUTE);
        Ok(())
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

fn find_mut<'a>(
    documents: &'a mut [DocumentRecord],
    id: &str,
) -> Result<&'a mut DocumentRecord, DocumentError> {
    documents
        .iter_mut()
        .find(|doc| doc.id == id)
        .ok_or_else(|| DocumentError::UnknownDocument { id: id.to_string() })
}
