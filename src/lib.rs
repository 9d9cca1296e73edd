// OnboardFlow Library - HR Onboarding Workflow Core
// This exposes the workflow state machines for testing and integration

pub mod config;
pub mod documents;
pub mod employees;
pub mod notify;
pub mod onboarding;
pub mod routing;
pub mod telemetry;
pub mod verification;

// Re-export key types for easy access
pub use config::{OnboardFlowConfig, VerificationConfig};
pub use documents::{
    seed_documents, DocumentEdit, DocumentError, DocumentMetadata, DocumentRecord, DocumentStatus,
    FileSelection, TransitionRecord, UploadGate, ValidationWorkflow,
};
pub use employees::{seed_records, EmployeeRecord, EmployeeRoster, RecordStatus, SortColumn, SortDirection};
pub use notify::{Notification, Notifier, RecordingNotifier, Severity, TracingNotifier};
pub use onboarding::{EmployeeForm, FlowError, FlowEvent, OnboardingFlow, OnboardingStep};
pub use routing::{Navigator, RecordingNavigator, TracingNavigator, DASHBOARD_ROUTE};
pub use telemetry::{
    create_workflow_span, generate_correlation_id, init_telemetry, shutdown_telemetry,
};
pub use verification::{
    spawn_timeline, ScheduleStep, TimelineHandle, VerificationSchedule, VerificationState,
    VerificationTimeline,
};
