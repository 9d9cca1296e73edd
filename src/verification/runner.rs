use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;

use super::timeline::{VerificationSchedule, VerificationTimeline};

/// Owner handle for a running timeline. Dropping it aborts the driving task,
/// so no counter update can land after the owning view is gone.
#[derive(Debug)]
pub struct TimelineHandle {
    task: JoinHandle<()>,
}

impl TimelineHandle {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimelineHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start the scripted verification run for `total` documents.
///
/// A single task walks the schedule, sleeping until each step's absolute
/// delay and publishing the advanced timeline through the watch channel.
/// Observers read or await snapshots via the receiver.
pub fn spawn_timeline(
    schedule: VerificationSchedule,
    total: usize,
) -> (watch::Receiver<VerificationTimeline>, TimelineHandle) {
    let (tx, rx) = watch::channel(VerificationTimeline::new(total));

    let task = tokio::spawn(async move {
        let started = Instant::now();
        for &step in schedule.steps() {
            tokio::time::sleep_until(started + step.delay).await;
            tx.send_modify(|timeline| timeline.advance_to(step.verified_count));
            let timeline = *tx.borrow();
            info!(
                verified = timeline.verified(),
                total = timeline.total(),
                completed = timeline.completed(),
                "verification progressed"
            );
        }
    });

    (rx, TimelineHandle { task })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn runner_follows_standard_schedule() {
        let started = Instant::now();
        let (mut rx, _handle) = spawn_timeline(VerificationSchedule::standard(), 5);
        assert_eq!(rx.borrow().verified(), 0);
        assert!(!rx.borrow().completed());

        let expected = [(1000u64, 2usize), (3000, 3), (4500, 4), (6000, 5)];
        for (at_ms, count) in expected {
            rx.changed().await.unwrap();
            assert_eq!(rx.borrow().verified(), count);
            assert_eq!(started.elapsed(), Duration::from_millis(at_ms));
        }
        assert!(rx.borrow().completed());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_freezes_the_counter() {
        let (mut rx, handle) = spawn_timeline(VerificationSchedule::standard(), 5);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().verified(), 2);

        drop(handle);
        tokio::time::advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;

        assert_eq!(rx.borrow().verified(), 2);
        assert!(!rx.borrow().completed());
    }

    #[tokio::test(start_paused = true)]
    async fn runner_task_finishes_after_last_step() {
        let (mut rx, handle) = spawn_timeline(VerificationSchedule::standard(), 5);
        while rx.changed().await.is_ok() {
            if rx.borrow().completed() {
                break;
            }
        }
        tokio::task::yield_now().await;
        assert!(handle.is_finished());
    }
}
