use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::documents::{DocumentError, DocumentStatus, FileSelection, UploadGate};
use crate::notify::{Notification, Notifier};
use crate::routing::{Navigator, DASHBOARD_ROUTE};

use super::form::EmployeeForm;

const COMPLETION_TOAST: Duration = Duration::from_secs(5);

/// Wizard steps in order. Completed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingStep {
    EmployeeInfo,
    DocumentUpload,
    Verification,
    Completed,
}

impl OnboardingStep {
    pub fn index(&self) -> usize {
        match self {
            OnboardingStep::EmployeeInfo => 0,
            OnboardingStep::DocumentUpload => 1,
            OnboardingStep::Verification => 2,
            OnboardingStep::Completed => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OnboardingStep::EmployeeInfo => "Employee Information",
            OnboardingStep::DocumentUpload => "Document Upload",
            OnboardingStep::Verification => "Verification Status",
            OnboardingStep::Completed => "Completed",
        }
    }
}

/// Events that can drive the wizard forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    SubmitInfo(EmployeeForm),
    Upload {
        id: String,
        selection: Option<FileSelection>,
    },
    RemoveUpload {
        id: String,
    },
    ContinueToVerification,
    VerificationFinished,
    CompleteOnboarding,
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("intake form incomplete, missing: {}", .missing.join(", "))]
    FormIncomplete { missing: Vec<String> },

    #[error("{remaining} documents still awaiting upload")]
    UploadsOutstanding { remaining: usize },

    #[error("verification has not finished")]
    VerificationUnfinished,

    #[error("event {event:?} not allowed in step {step:?}")]
    InvalidEvent { step: OnboardingStep, event: FlowEvent },

    #[error(transparent)]
    Document(#[from] DocumentError),
}

#[derive(Debug, Clone, Serialize)]
pub struct StepTransitionRecord {
    pub from: OnboardingStep,
    pub to: OnboardingStep,
    pub timestamp: DateTime<Utc>,
}

/// The three-step intake wizard: employee information, document upload, then
/// scripted verification. Each advance is gated on its own step's predicate.
pub struct OnboardingFlow {
    step: OnboardingStep,
    form: EmployeeForm,
    upload: UploadGate,
    verification_done: bool,
    history: Vec<StepTransitionRecord>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl OnboardingFlow {
    pub fn new(notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            step: OnboardingStep::EmployeeInfo,
            form: EmployeeForm::default(),
            upload: UploadGate::default(),
            verification_done: false,
            history: Vec::new(),
            notifier,
            navigator,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn upload(&self) -> &UploadGate {
        &self.upload
    }

    pub fn verification_finished(&self) -> bool {
        self.verification_done
    }

    pub fn history(&self) -> &[StepTransitionRecord] {
        &self.history
    }

    /// Main transition table. Mutations only happen here so every change is
    /// driven by an explicit event.
    pub fn handle_event(&mut self, event: FlowEvent) -> Result<(), FlowError> {
        let step = self.step;
        match (step, event) {
            (OnboardingStep::EmployeeInfo, FlowEvent::SubmitInfo(form)) => {
                if !form.is_complete() {
                    let missing: Vec<String> = form
                        .missing_fields()
                        .into_iter()
                        .map(str::to_string)
                        .collect();
                    warn!(missing = ?missing, "intake form rejected");
                    return Err(FlowError::FormIncomplete { missing });
                }
                info!(employee = %form.full_name(), "intake form submitted");
                self.form = form;
                self.transition(OnboardingStep::DocumentUpload);
                Ok(())
            }

            (OnboardingStep::DocumentUpload, FlowEvent::Upload { id, selection }) => {
                self.upload.upload(&id, selection.as_ref())?;
                Ok(())
            }

            (OnboardingStep::DocumentUpload, FlowEvent::RemoveUpload { id }) => {
                self.upload.remove(&id)?;
                Ok(())
            }

            (OnboardingStep::DocumentUpload, FlowEvent::ContinueToVerification) => {
                if !self.upload.all_uploaded() {
                    let remaining = self
                        .upload
                        .documents()
                        .iter()
                        .filter(|doc| doc.status == DocumentStatus::Pending)
                        .count();
                    return Err(FlowError::UploadsOutstanding { remaining });
                }
                self.transition(OnboardingStep::Verification);
                Ok(())
            }

            (OnboardingStep::Verification, FlowEvent::VerificationFinished) => {
                self.verification_done = true;
                info!("verification timeline finished");
                Ok(())
            }

            (OnboardingStep::Verification, FlowEvent::CompleteOnboarding) => {
                if !self.verification_done {
                    return Err(FlowError::VerificationUnfinished);
                }
                self.transition(OnboardingStep::Completed);
                self.notifier.notify(
                    Notification::success(
                        "Onboarding completed successfully!",
                        "The employee has been successfully onboarded.",
                    )
                    .with_duration(COMPLETION_TOAST),
                );
                self.navigator.navigate(DASHBOARD_ROUTE);
                Ok(())
            }

            (step, event) => Err(FlowError::InvalidEvent { step, event }),
        }
    }

    fn transition(&mut self, to: OnboardingStep) {
        let from = self.step;
        info!(from = ?from, to = ?to, "onboarding step transition");
        self.history.push(StepTransitionRecord {
            from,
            to,
            timestamp: Utc::now(),
        });
        self.step = to;
    }
}
