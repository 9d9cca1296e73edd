// Document lifecycle - upload gating and reviewer validation over the
// per-employee document checklist.

pub mod types;
pub mod upload;
pub mod validation;

pub use types::{
    seed_documents, DocumentEdit, DocumentError, DocumentMetadata, DocumentRecord, DocumentStatus,
    TransitionRecord,
};
pub use upload::{FileSelection, UploadGate};
pub use validation::ValidationWorkflow;
