// Timeline runner tests against a virtual clock - no wall-clock waits.

use std::time::Duration;

use tokio::time::Instant;

use onboardflow::verification::{
    spawn_timeline, ScheduleStep, VerificationSchedule, VerificationState,
};

#[tokio::test(start_paused = true)]
async fn production_script_reaches_each_target_on_time() {
    let started = Instant::now();
    let (mut rx, _handle) = spawn_timeline(VerificationSchedule::standard(), 5);

    assert_eq!(rx.borrow().verified(), 0);
    assert!(!rx.borrow().completed());

    for (at_ms, count) in [(1000u64, 2usize), (3000, 3), (4500, 4), (6000, 5)] {
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().verified(), count);
        assert_eq!(started.elapsed(), Duration::from_millis(at_ms));
    }
    assert!(rx.borrow().completed());
    assert_eq!(rx.borrow().progress_percent(), 100);
}

#[tokio::test(start_paused = true)]
async fn teardown_before_the_end_freezes_the_counter() {
    let (mut rx, handle) = spawn_timeline(VerificationSchedule::standard(), 5);

    rx.changed().await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().verified(), 3);

    drop(handle);
    tokio::time::advance(Duration::from_secs(30)).await;
    tokio::task::yield_now().await;

    assert_eq!(rx.borrow().verified(), 3);
    assert!(!rx.borrow().completed());
}

#[tokio::test(start_paused = true)]
async fn per_document_state_tracks_the_counter() {
    let (mut rx, _handle) = spawn_timeline(VerificationSchedule::standard(), 5);

    rx.changed().await.unwrap();
    let timeline = *rx.borrow();
    assert_eq!(timeline.verified(), 2);

    let states: Vec<VerificationState> = (0..5).map(|i| timeline.state_of(i)).collect();
    assert_eq!(
        states,
        vec![
            VerificationState::Verified,
            VerificationState::Verified,
            VerificationState::InProgress,
            VerificationState::Pending,
            VerificationState::Pending,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn custom_schedules_replay_the_same_way() {
    let schedule = VerificationSchedule::new(vec![
        ScheduleStep {
            delay: Duration::from_millis(100),
            verified_count: 1,
        },
        ScheduleStep {
            delay: Duration::from_millis(200),
            verified_count: 3,
        },
    ]);

    let (mut rx, _handle) = spawn_timeline(schedule, 3);
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().verified(), 1);
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().verified(), 3);
    assert!(rx.borrow().completed());
}
