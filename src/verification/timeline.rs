use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Displayed verification state of one document, derived purely from its
/// position versus the verified counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationState {
    Verified,
    InProgress,
    Pending,
}

impl VerificationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationState::Verified => "verified",
            VerificationState::InProgress => "in-progress",
            VerificationState::Pending => "pending",
        }
    }
}

/// One point on the scripted schedule: at `delay` past start, the verified
/// counter reaches `verified_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleStep {
    pub delay: Duration,
    pub verified_count: usize,
}

/// The fixed choreography driving the verification screen. Delays are
/// measured from start, not between steps.
#[derive(Debug, Clone)]
pub struct VerificationSchedule {
    steps: Vec<ScheduleStep>,
}

impl VerificationSchedule {
    pub fn new(mut steps: Vec<ScheduleStep>) -> Self {
        steps.sort_by_key(|step| step.delay);
        Self { steps }
    }

    /// The production script: 2 documents at 1s, then one more at 3s, 4.5s
    /// and 6s.
    pub fn standard() -> Self {
        Self::new(vec![
            ScheduleStep {
                delay: Duration::from_millis(1000),
                verified_count: 2,
            },
            ScheduleStep {
                delay: Duration::from_millis(3000),
                verified_count: 3,
            },
            ScheduleStep {
                delay: Duration::from_millis(4500),
                verified_count: 4,
            },
            ScheduleStep {
                delay: Duration::from_millis(6000),
                verified_count: 5,
            },
        ])
    }

    pub fn steps(&self) -> &[ScheduleStep] {
        &self.steps
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.last().map(|step| step.delay).unwrap_or_default()
    }
}

impl Default for VerificationSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// Verified-documents counter plus the derived completion flag. Advanced
/// only by the schedule runner, never by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationTimeline {
    total: usize,
    verified: usize,
}

impl VerificationTimeline {
    pub fn new(total: usize) -> Self {
        Self { total, verified: 0 }
    }

    pub fn verified(&self) -> usize {
        self.verified
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn completed(&self) -> bool {
        self.verified == self.total
    }

    /// Move the counter forward to `count`, clamped to the document total.
    /// The counter is monotonic; a stale target is ignored.
    pub fn advance_to(&mut self, count: usize) {
        let count = count.min(self.total);
        if count > self.verified {
            self.verified = count;
        }
    }

    pub fn state_of(&self, index: usize) -> VerificationState {
        if index < self.verified {
            VerificationState::Verified
        } else if index == self.verified {
            VerificationState::InProgress
        } else {
            VerificationState::Pending
        }
    }

    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.verified as f64 / self.total as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_schedule_matches_script() {
        let schedule = VerificationSchedule::standard();
        let targets: Vec<(u64, usize)> = schedule
            .steps()
            .iter()
            .map(|step| (step.delay.as_millis() as u64, step.verified_count))
            .collect();
        assert_eq!(targets, vec![(1000, 2), (3000, 3), (4500, 4), (6000, 5)]);
        assert_eq!(schedule.total_duration(), Duration::from_millis(6000));
    }

    #[test]
    fn schedule_steps_are_ordered_by_delay() {
        let schedule = VerificationSchedule::new(vec![
            ScheduleStep {
                delay: Duration::from_secs(2),
                verified_count: 2,
            },
            ScheduleStep {
                delay: Duration::from_secs(1),
                verified_count: 1,
            },
        ]);
        assert_eq!(schedule.steps()[0].verified_count, 1);
    }

    #[test]
    fn counter_is_monotonic_and_clamped() {
        let mut timeline = VerificationTimeline::new(5);
        timeline.advance_to(3);
        timeline.advance_to(2);
        assert_eq!(timeline.verified(), 3);

        timeline.advance_to(9);
        assert_eq!(timeline.verified(), 5);
        assert!(timeline.completed());
    }

    #[test]
    fn document_state_derives_from_index() {
        let mut timeline = VerificationTimeline::new(5);
        timeline.advance_to(2);

        assert_eq!(timeline.state_of(0), VerificationState::Verified);
        assert_eq!(timeline.state_of(1), VerificationState::Verified);
        assert_eq!(timeline.state_of(2), VerificationState::InProgress);
        assert_eq!(timeline.state_of(3), VerificationState::Pending);
        assert_eq!(timeline.state_of(4), VerificationState::Pending);
    }

    #[test]
    fn progress_percent_rounds() {
        let mut timeline = VerificationTimeline::new(5);
        assert_eq!(timeline.progress_percent(), 0);
        timeline.advance_to(2);
        assert_eq!(timeline.progress_percent(), 40);
        timeline.advance_to(5);
        assert_eq!(timeline.progress_percent(), 100);
    }
}
