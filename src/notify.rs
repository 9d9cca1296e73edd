// Notification surface - the workflow layer signals outcomes without knowing
// how they are displayed.

use std::sync::Mutex;
use std::time::Duration;

use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A toast-style message: title, optional description, optional display
/// duration. Duration is advisory; surfaces fall back to their own default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            description: Some(description.into()),
            duration: None,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            description: Some(description.into()),
            duration: None,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            description: None,
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Default surface: structured log lines instead of toasts.
#[derive(Debug, Default)]
pub struct TracingNotifier {
    default_duration: Option<Duration>,
}

impl TracingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display duration applied to notifications that do not carry their own.
    pub fn with_default_duration(duration: Duration) -> Self {
        Self {
            default_duration: Some(duration),
        }
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let description = notification.description.as_deref().unwrap_or("");
        let duration_ms = notification
            .duration
            .or(self.default_duration)
            .map(|d| d.as_millis() as u64);
        match notification.severity {
            Severity::Error => error!(
                title = %notification.title,
                description = %description,
                duration_ms,
                "notification"
            ),
            Severity::Success | Severity::Info => info!(
                title = %notification.title,
                description = %description,
                duration_ms,
                "notification"
            ),
        }
    }
}

/// Test double that captures every notification for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notifications.lock().unwrap())
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_captures_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::success("first", "one"));
        notifier.notify(Notification::error("second", "two"));

        let seen = notifier.take();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].severity, Severity::Success);
        assert_eq!(seen[1].title, "second");
        assert!(notifier.is_empty());
    }

    #[test]
    fn duration_is_advisory_and_optional() {
        let n = Notification::success("done", "all good").with_duration(Duration::from_secs(5));
        assert_eq!(n.duration, Some(Duration::from_secs(5)));
        assert!(Notification::info("hi").duration.is_none());
    }
}
