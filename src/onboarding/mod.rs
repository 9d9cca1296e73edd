// Multi-step intake wizard - form gating plus the step state machine.

pub mod flow;
pub mod form;

pub use flow::{FlowError, FlowEvent, OnboardingFlow, OnboardingStep, StepTransitionRecord};
pub use form::EmployeeForm;
