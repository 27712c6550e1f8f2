use std::time::{Duration, Instant};

use crate::domain::SubmissionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A message for the user produced by a finished submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn submitted() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Application Submitted".to_string(),
            description: "Thank you for your application! We will review it shortly.".to_string(),
        }
    }

    pub fn submission_failed(error: &SubmissionError) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Submission Failed".to_string(),
            description: format!("{error}. Your answers were kept, please try again."),
        }
    }
}

/// A notification on screen, with the moment it stops being shown.
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(notification: Notification, shown_at: Instant, duration: Duration) -> Self {
        Self {
            notification,
            expires_at: shown_at + duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitted_text() {
        let note = Notification::submitted();
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.title, "Application Submitted");
        assert_eq!(
            note.description,
            "Thank you for your application! We will review it shortly."
        );
    }

    #[test]
    fn test_failure_mentions_cause() {
        let note =
            Notification::submission_failed(&SubmissionError::Unavailable("timeout".to_string()));
        assert_eq!(note.kind, NotificationKind::Error);
        assert!(note.description.contains("timeout"));
    }

    #[test]
    fn test_toast_expiry() {
        let start = Instant::now();
        let toast = Toast::new(Notification::submitted(), start, Duration::from_secs(5));
        assert!(!toast.is_expired(start));
        assert!(!toast.is_expired(start + Duration::from_millis(4999)));
        assert!(toast.is_expired(start + Duration::from_secs(5)));
    }
}
