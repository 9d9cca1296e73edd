// Scripted verification progress - a canned choreography, not a real
// verification pipeline.

pub mod runner;
pub mod timeline;

pub use runner::{spawn_timeline, TimelineHandle};
pub use timeline::{ScheduleStep, VerificationSchedule, VerificationState, VerificationTimeline};
